//! When to stop splitting.

use super::dissimilarity::average_dissimilarity;
use super::distance::DistanceMatrix;
use super::partition::ClusterPartition;
use crate::error::{Error, Result};

/// Default threshold for [`StopMode::NaturalStop`].
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Stopping rule for a divisive run. Exactly one is active per run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopMode {
    /// Split until the partition holds exactly `k` clusters.
    FixedCount(usize),
    /// Split until a singleton appears or the mean cluster dissimilarity falls to
    /// `threshold` or below.
    NaturalStop {
        /// Mean average-dissimilarity at or below which splitting stops.
        threshold: f32,
    },
}

impl Default for StopMode {
    fn default() -> Self {
        StopMode::NaturalStop {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl StopMode {
    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            StopMode::FixedCount(0) => Err(Error::InvalidParameter {
                name: "n_clusters",
                message: "must be at least 1",
            }),
            StopMode::NaturalStop { threshold } if !threshold.is_finite() || threshold < 0.0 => {
                Err(Error::InvalidParameter {
                    name: "threshold",
                    message: "must be finite and non-negative",
                })
            }
            _ => Ok(()),
        }
    }

    /// Whether another split should be attempted on `partition`.
    pub fn should_continue(&self, partition: &ClusterPartition, matrix: &DistanceMatrix) -> bool {
        match *self {
            StopMode::FixedCount(k) => partition.len() < k,
            StopMode::NaturalStop { threshold } => {
                // A singleton cannot be split, so its appearance ends natural progress.
                if partition.has_singleton() {
                    return false;
                }
                mean_dissimilarity(partition, matrix) > threshold
            }
        }
    }
}

/// Mean of [`average_dissimilarity`] over every live cluster.
pub(crate) fn mean_dissimilarity(partition: &ClusterPartition, matrix: &DistanceMatrix) -> f32 {
    let n = partition.len();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = partition
        .iter()
        .map(|(_, members)| f64::from(average_dissimilarity(members, matrix)))
        .sum();
    (total / n as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: f32) -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![side, 0.0],
            vec![0.0, side],
            vec![side, side],
        ]
    }

    #[test]
    fn fixed_count_continues_below_target() {
        let m = DistanceMatrix::build(&square(1.0)).unwrap();
        let mut p = ClusterPartition::new(4).unwrap();
        let mode = StopMode::FixedCount(2);
        assert!(mode.should_continue(&p, &m));
        p.replace(0, vec![0, 1], vec![2, 3]);
        assert!(!mode.should_continue(&p, &m));
    }

    #[test]
    fn natural_stop_on_tight_cluster() {
        let m = DistanceMatrix::build(&square(0.01)).unwrap();
        let p = ClusterPartition::new(4).unwrap();
        assert!(!StopMode::default().should_continue(&p, &m));
    }

    #[test]
    fn natural_stop_continues_on_spread_cluster() {
        let m = DistanceMatrix::build(&square(10.0)).unwrap();
        let p = ClusterPartition::new(4).unwrap();
        assert!(StopMode::default().should_continue(&p, &m));
    }

    #[test]
    fn natural_stop_halts_at_exact_threshold() {
        // Two points 2 apart: ordered pair distances 0, 2, 2, 0 average to exactly 1.
        let m = DistanceMatrix::build(&[vec![0.0, 0.0], vec![2.0, 0.0]]).unwrap();
        let p = ClusterPartition::new(2).unwrap();
        assert_eq!(mean_dissimilarity(&p, &m), 1.0);
        assert!(!StopMode::NaturalStop { threshold: 1.0 }.should_continue(&p, &m));
        assert!(StopMode::NaturalStop { threshold: 0.5 }.should_continue(&p, &m));
    }

    #[test]
    fn natural_stop_halts_on_singleton() {
        let m = DistanceMatrix::build(&square(10.0)).unwrap();
        let mut p = ClusterPartition::new(4).unwrap();
        p.replace(0, vec![0], vec![1, 2, 3]);
        assert!(!StopMode::default().should_continue(&p, &m));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(StopMode::FixedCount(0).validate().is_err());
        assert!(StopMode::FixedCount(1).validate().is_ok());
        let negative = StopMode::NaturalStop { threshold: -1.0 };
        assert!(negative.validate().is_err());
        let nan = StopMode::NaturalStop { threshold: f32::NAN };
        assert!(nan.validate().is_err());
        assert!(StopMode::default().validate().is_ok());
    }
}
