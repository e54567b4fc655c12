//! Cluster outlines for display.

use std::collections::BTreeMap;

use super::evaluate::NOISE;
use super::traits::Visualizer;

/// Convex hull of `points` (Andrew's monotone chain).
///
/// Vertices come back counter-clockwise starting from the lowest `(x, y)`, without
/// duplicates or collinear points. Fewer than three distinct points return the distinct
/// points themselves (a point or a segment).
pub fn convex_hull(points: &[[f32; 2]]) -> Vec<[f32; 2]> {
    let mut pts: Vec<[f32; 2]> = points.to_vec();
    pts.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    fn cross(o: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
        (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
    }

    let mut lower: Vec<[f32; 2]> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<[f32; 2]> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain's last point starts the other chain.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// A [`Visualizer`] that logs each cluster's convex hull at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct HullReport;

impl HullReport {
    /// Hull of every non-noise cluster, keyed by label.
    ///
    /// Only the first two coordinates of each point are used; one-dimensional points are
    /// placed on `y = 0`.
    pub fn hulls(&self, points: &[Vec<f32>], labels: &[usize]) -> BTreeMap<usize, Vec<[f32; 2]>> {
        let mut members: BTreeMap<usize, Vec<[f32; 2]>> = BTreeMap::new();
        for (p, &label) in points.iter().zip(labels) {
            if label == NOISE {
                continue;
            }
            let x = p.first().copied().unwrap_or(0.0);
            let y = p.get(1).copied().unwrap_or(0.0);
            members.entry(label).or_default().push([x, y]);
        }
        members
            .into_iter()
            .map(|(label, pts)| (label, convex_hull(&pts)))
            .collect()
    }
}

impl Visualizer for HullReport {
    fn render(&self, points: &[Vec<f32>], labels: &[usize], title: &str) {
        let hulls = self.hulls(points, labels);
        log::info!("{title}: {} clusters", hulls.len());
        for (label, hull) in &hulls {
            let size = labels.iter().filter(|&&l| l == *label).count();
            log::info!("  cluster {label} ({size} points) hull {hull:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull_of_square_drops_interior_and_edges() {
        let pts = [
            [0.0, 0.0],
            [1.0, 1.0],
            [2.0, 0.0],
            [1.0, 0.0],
            [2.0, 2.0],
            [0.0, 2.0],
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
    }

    #[test]
    fn degenerate_hulls() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&[[1.0, 1.0], [1.0, 1.0]]), vec![[1.0, 1.0]]);
        assert_eq!(
            convex_hull(&[[3.0, 0.0], [1.0, 0.0]]),
            vec![[1.0, 0.0], [3.0, 0.0]]
        );
    }

    #[test]
    fn hulls_skip_noise() {
        let points = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![50.0, 50.0],
        ];
        let hulls = HullReport.hulls(&points, &[7, 7, 7, NOISE]);
        assert_eq!(hulls.len(), 1);
        assert_eq!(hulls[&7].len(), 3);
    }
}
