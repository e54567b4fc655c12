use thiserror::Error;

/// Errors returned by the clustering engine and its collaborators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Input points cannot be clustered (too few, non-finite, zero-dimensional, ...).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// More than one stopping mode was requested.
    #[error("conflicting configuration: both a cluster count and a dissimilarity threshold were requested")]
    ConfigConflict,

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A cluster could not be bisected into two non-empty parts.
    ///
    /// The engine absorbs this by freezing the cluster; it only reaches callers that
    /// invoke [`split`](crate::cluster::split()) directly.
    #[error("cluster of size {size} cannot be split")]
    UnsplittableCluster {
        /// Size of the cluster that failed to split.
        size: usize,
    },

    /// The requested number of clusters cannot be produced.
    #[error("target unreachable: requested {requested} clusters, reached {reached}")]
    TargetUnreachable {
        /// Requested number of clusters.
        requested: usize,
        /// Number of clusters reached before the run gave up.
        reached: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
