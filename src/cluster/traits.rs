use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model and return one cluster label per input point.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For configurations that discover the number of clusters while running (e.g. a
    /// dissimilarity threshold), this returns 0.
    fn n_clusters(&self) -> usize;
}

/// Scores a finished clustering.
pub trait Evaluator {
    /// Score `labels` against `points`.
    ///
    /// Returns `Ok(None)` when the labeling admits no meaningful score (for example,
    /// fewer than two distinct non-noise labels).
    fn score(&self, points: &[Vec<f32>], labels: &[usize]) -> Result<Option<f32>>;
}

/// Renders a finished clustering.
///
/// Implementations only ever see shared borrows of the points and labels.
pub trait Visualizer {
    /// Render `labels` over `points` under `title`.
    fn render(&self, points: &[Vec<f32>], labels: &[usize], title: &str);
}
