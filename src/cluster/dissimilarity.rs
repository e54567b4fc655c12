//! Ranking clusters by internal dissimilarity.

use super::distance::DistanceMatrix;
use super::partition::ClusterPartition;

/// Mean distance over all ordered pairs of `indices`, self-pairs included.
///
/// A singleton therefore scores exactly 0, as does an empty slice.
pub fn average_dissimilarity(indices: &[usize], matrix: &DistanceMatrix) -> f32 {
    let m = indices.len();
    if m == 0 {
        return 0.0;
    }
    let mut total = 0.0f64;
    for &i in indices {
        let row = matrix.row(i);
        for &j in indices {
            total += f64::from(row[j]);
        }
    }
    (total / (m * m) as f64) as f32
}

/// Id of the non-frozen cluster with the highest [`average_dissimilarity`].
///
/// Ties go to the lowest id, i.e. the earliest-created cluster. Returns `None` when every
/// cluster is frozen.
pub fn select_cluster_to_split(
    partition: &ClusterPartition,
    matrix: &DistanceMatrix,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (id, members) in partition.eligible() {
        let score = average_dissimilarity(members, matrix);
        match best {
            Some((_, s)) if score <= s => {}
            _ => best = Some((id, score)),
        }
    }
    best.map(|(id, _)| id)
}
