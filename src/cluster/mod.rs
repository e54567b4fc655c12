//! Divisive hierarchical clustering.
//!
//! ## Top-down vs bottom-up
//!
//! **Agglomerative** clustering starts from singletons and merges the closest pair of
//! clusters. **Divisive** clustering runs the other way: everything starts in one
//! cluster, which is repeatedly bisected. Divisive splitting makes its coarse decisions
//! first, with the whole dataset in view, which suits the "a few big groups" question
//! better than merging does.
//!
//! ## The engine
//!
//! [`Divisive`] keeps an arena of clusters ([`ClusterPartition`]) keyed by monotonically
//! allocated ids. Each round it:
//!
//! 1. asks the [`StopMode`] whether to continue,
//! 2. selects the cluster with the highest average internal distance
//!    ([`select_cluster_to_split`]),
//! 3. bisects it around the member farthest from its centroid ([`split`]).
//!
//! **Objective** of the selection step, for a cluster `C` with `m` members:
//!
//! ```text
//! D(C) = (1 / m²) Σ_{i ∈ C} Σ_{j ∈ C} d(i, j)
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly blob-shaped (the split is a distance-to-seed cut)
//! - Outliers are acceptable as their own clusters (they are split off early)
//!
//! **When to use**: small to mid-sized 2-D datasets where you want a reproducible,
//! seed-free hierarchy, either to a fixed `k` or until clusters are tight.
//!
//! ## Evaluating and displaying
//!
//! [`Silhouette`] implements [`Evaluator`]; [`HullReport`] implements [`Visualizer`] by
//! logging one convex hull per cluster. Both only read the points and labels.
//!
//! ## Usage
//!
//! ```rust
//! use cleave::cluster::{Clustering, Divisive, Evaluator, Silhouette};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![10.0, 11.0],
//! ];
//!
//! // Fixed number of clusters
//! let fit = Divisive::new().with_n_clusters(2).fit(&data).unwrap();
//! assert_eq!(fit.n_clusters, 2);
//! assert_eq!(fit.labels[0], fit.labels[1]);  // First two together
//! assert_ne!(fit.labels[0], fit.labels[2]);  // Separate from last two
//!
//! // Natural stopping (default threshold 0.1)
//! let labels = Divisive::new().fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//!
//! let score = Silhouette.score(&data, &fit.labels).unwrap();
//! assert!(score.unwrap() > 0.9);
//! ```

mod dissimilarity;
mod distance;
mod divisive;
mod evaluate;
mod partition;
mod split;
mod stopping;
mod traits;
mod util;
mod visualize;

pub use dissimilarity::{average_dissimilarity, select_cluster_to_split};
pub use distance::DistanceMatrix;
pub use divisive::{Divisive, DivisiveFit, SplitRecord};
pub use evaluate::{Silhouette, NOISE};
pub use partition::ClusterPartition;
pub use split::split;
pub use stopping::{StopMode, DEFAULT_THRESHOLD};
pub use traits::{Clustering, Evaluator, Visualizer};
pub use visualize::{convex_hull, HullReport};
