//! Divisive clustering on a simple 2D dataset, with silhouette scoring and hull output.
//!
//! Run with `RUST_LOG=info` (or `debug` / `trace` to follow the splits).

use cleave::{Divisive, Evaluator, HullReport, Silhouette, Visualizer};

fn main() {
    env_logger::init();

    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    let runs = [
        ("Divisive (k=3)", Divisive::new().with_n_clusters(3)),
        ("Divisive (natural stop)", Divisive::new()),
    ];

    for (title, model) in runs {
        let fit = match model.fit(&data) {
            Ok(fit) => fit,
            Err(e) => {
                eprintln!("{title}: {e}");
                continue;
            }
        };

        println!("=== {title} ===");
        for (i, label) in fit.compact_labels().iter().enumerate() {
            println!(
                "  point {:2} ({:5.1}, {:5.1}) => cluster {}",
                i, data[i][0], data[i][1], label
            );
        }
        for s in &fit.splits {
            println!(
                "  split {} -> {:?} sizes {:?} (dissimilarity {:.3})",
                s.parent, s.children, s.sizes, s.dissimilarity
            );
        }
        match Silhouette.score(&data, &fit.labels) {
            Ok(Some(score)) => println!("  silhouette: {score:.2}"),
            Ok(None) => println!("  silhouette: not available (fewer than 2 clusters)"),
            Err(e) => println!("  silhouette: {e}"),
        }
        println!();

        HullReport.render(&data, &fit.labels, title);
    }
}
