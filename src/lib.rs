//! Divisive hierarchical clustering.
//!
//! `cleave` clusters dense points top-down: everything starts in one cluster, and the
//! engine keeps bisecting the least coherent cluster until a stopping rule fires.
//!
//! The primary public API is under [`cluster`], which provides:
//! - the divisive engine ([`Divisive`]) with fixed-count and natural stopping
//! - its building blocks (distance matrix, dissimilarity ranking, farthest-point split)
//! - silhouette evaluation and a convex-hull reporting collaborator

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    average_dissimilarity, convex_hull, select_cluster_to_split, split, ClusterPartition,
    Clustering, DistanceMatrix, Divisive, DivisiveFit, Evaluator, HullReport, Silhouette,
    SplitRecord, StopMode, Visualizer, DEFAULT_THRESHOLD, NOISE,
};
pub use error::{Error, Result};
