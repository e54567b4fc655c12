//! Divisive (top-down) hierarchical clustering.
//!
//! # The Algorithm
//!
//! Start with every point in one cluster. Then repeat:
//!
//! 1. Ask the stopping rule whether to go on.
//! 2. Pick the non-frozen cluster with the highest average internal distance.
//! 3. Bisect it with the farthest-point heuristic (see [`split`](super::split())).
//! 4. Replace it with the two halves under fresh ids.
//!
//! Clusters that cannot be bisected (singletons, degenerate splits) are frozen and never
//! selected again, so the loop always makes progress.
//!
//! ## Stopping
//!
//! - [`StopMode::FixedCount`]: stop at exactly `k` clusters. Fails with
//!   [`Error::TargetUnreachable`] when `k` exceeds the number of points or every cluster
//!   freezes first.
//! - [`StopMode::NaturalStop`]: stop once any cluster is a singleton or the mean of the
//!   clusters' average dissimilarities is at or below the threshold. The rule is checked
//!   before the first split, so an already-tight point set stays a single cluster.
//!
//! ## Determinism
//!
//! There is no randomness. Selection ties go to the earliest-created cluster and seed ties
//! to the first member, so identical input yields identical labels and split history.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) for the distance matrix, plus O(Σ m²) per selection over live clusters.
//! - **Space**: O(n²) for the distance matrix.

use super::dissimilarity::{average_dissimilarity, select_cluster_to_split};
use super::distance::DistanceMatrix;
use super::partition::ClusterPartition;
use super::split::split;
use super::stopping::StopMode;
use super::traits::Clustering;
use crate::error::{Error, Result};

/// Divisive clustering engine.
///
/// Holds configuration only; every [`fit`](Divisive::fit) works on its own partition.
#[derive(Debug, Clone, Default)]
pub struct Divisive {
    n_clusters: Option<usize>,
    threshold: Option<f32>,
}

/// One executed split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRecord {
    /// Id of the cluster that was split (retired afterwards).
    pub parent: usize,
    /// Ids allocated to the two halves; the seed's half comes first.
    pub children: (usize, usize),
    /// Sizes of the two halves.
    pub sizes: (usize, usize),
    /// Average dissimilarity of the parent when it was selected.
    pub dissimilarity: f32,
}

/// Result of a divisive run.
#[derive(Debug, Clone)]
pub struct DivisiveFit {
    /// Cluster id for each input point.
    pub labels: Vec<usize>,
    /// Number of clusters produced.
    pub n_clusters: usize,
    /// Splits in the order they were executed.
    pub splits: Vec<SplitRecord>,
    /// Clusters certified unsplittable during the run, ascending.
    pub frozen: Vec<usize>,
}

impl DivisiveFit {
    /// Labels renumbered to `0..n_clusters`, preserving the order of cluster ids.
    pub fn compact_labels(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.labels.clone();
        ids.sort_unstable();
        ids.dedup();
        self.labels
            .iter()
            .map(|l| ids.binary_search(l).unwrap_or_default())
            .collect()
    }
}

impl Divisive {
    /// Create a divisive clusterer with natural stopping at the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop at exactly `k` clusters.
    pub fn with_n_clusters(mut self, k: usize) -> Self {
        self.n_clusters = Some(k);
        self
    }

    /// Stop once mean cluster dissimilarity is at or below `threshold`.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the stopping rule directly, replacing any earlier request.
    pub fn with_mode(mut self, mode: StopMode) -> Self {
        match mode {
            StopMode::FixedCount(k) => {
                self.n_clusters = Some(k);
                self.threshold = None;
            }
            StopMode::NaturalStop { threshold } => {
                self.n_clusters = None;
                self.threshold = Some(threshold);
            }
        }
        self
    }

    /// Resolve the configured stopping rule.
    ///
    /// Fails with [`Error::ConfigConflict`] when both a count and a threshold were
    /// requested. With neither, natural stopping at the default threshold applies.
    pub fn mode(&self) -> Result<StopMode> {
        let mode = match (self.n_clusters, self.threshold) {
            (Some(_), Some(_)) => return Err(Error::ConfigConflict),
            (Some(k), None) => StopMode::FixedCount(k),
            (None, Some(threshold)) => StopMode::NaturalStop { threshold },
            (None, None) => StopMode::default(),
        };
        mode.validate()?;
        Ok(mode)
    }

    /// Run the divisive loop over `data`.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<DivisiveFit> {
        let mode = self.mode()?;
        let matrix = DistanceMatrix::build(data)?;
        let n = matrix.len();
        log::debug!("divisive fit: n={n}, mode={mode:?}");

        if let StopMode::FixedCount(k) = mode {
            if k > n {
                return Err(Error::TargetUnreachable {
                    requested: k,
                    reached: 1,
                });
            }
        }

        let mut partition = ClusterPartition::new(n)?;
        let mut splits = Vec::new();

        while mode.should_continue(&partition, &matrix) {
            let Some(id) = select_cluster_to_split(&partition, &matrix) else {
                if let StopMode::FixedCount(k) = mode {
                    return Err(Error::TargetUnreachable {
                        requested: k,
                        reached: partition.len(),
                    });
                }
                log::debug!("no splittable clusters left");
                break;
            };

            let members = partition.get(id).unwrap_or_default();
            if members.len() == 1 {
                log::trace!("freezing singleton cluster {id}");
                partition.freeze(id);
                continue;
            }

            let dissimilarity = average_dissimilarity(members, &matrix);
            let (a, b) = match split(members, &matrix, data) {
                Ok(halves) => halves,
                Err(Error::UnsplittableCluster { size }) => {
                    log::debug!("freezing unsplittable cluster {id} (size {size})");
                    partition.freeze(id);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let sizes = (a.len(), b.len());
            match partition.replace(id, a, b) {
                Some(children) => {
                    log::trace!(
                        "split cluster {id} (dissimilarity {dissimilarity:.4}) into {children:?} with sizes {sizes:?}"
                    );
                    splits.push(SplitRecord {
                        parent: id,
                        children,
                        sizes,
                        dissimilarity,
                    });
                }
                None => partition.freeze(id),
            }
        }

        log::debug!(
            "divisive fit done: {} clusters after {} splits",
            partition.len(),
            splits.len()
        );

        Ok(DivisiveFit {
            labels: partition.labels(),
            n_clusters: partition.len(),
            splits,
            frozen: partition.frozen().collect(),
        })
    }
}

impl Clustering for Divisive {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        match self.mode() {
            Ok(StopMode::FixedCount(k)) => k,
            _ => 0,
        }
    }
}
