//! Silhouette scoring for finished clusterings.
//!
//! For a point `i` in cluster `C`:
//!
//! ```text
//! a(i) = mean distance from i to the other members of C
//! b(i) = min over clusters D != C of the mean distance from i to members of D
//! s(i) = (b(i) - a(i)) / max(a(i), b(i))
//! ```
//!
//! The score is the mean of `s(i)` over all labeled points. A point alone in its cluster
//! has `s(i) = 0`. Values close to 1 mean compact, well-separated clusters.

use std::collections::BTreeMap;

use super::traits::Evaluator;
use super::util;
use crate::error::{Error, Result};

/// Label marking a point as noise. Evaluators and visualizers skip it.
pub const NOISE: usize = usize::MAX;

/// Mean silhouette coefficient evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silhouette;

impl Evaluator for Silhouette {
    fn score(&self, points: &[Vec<f32>], labels: &[usize]) -> Result<Option<f32>> {
        if points.len() != labels.len() {
            return Err(Error::InvalidInput {
                message: "points and labels differ in length",
            });
        }

        let scored: Vec<usize> = (0..labels.len()).filter(|&i| labels[i] != NOISE).collect();
        if scored.is_empty() {
            return Ok(None);
        }
        util::validate_points(points)?;

        // label -> dense cluster index
        let mut clusters: BTreeMap<usize, usize> = BTreeMap::new();
        for &i in &scored {
            let next = clusters.len();
            clusters.entry(labels[i]).or_insert(next);
        }
        let k = clusters.len();
        if k < 2 || k >= scored.len() {
            return Ok(None);
        }

        let mut sizes = vec![0usize; k];
        for &i in &scored {
            sizes[clusters[&labels[i]]] += 1;
        }

        let mut total = 0.0f64;
        let mut sums = vec![0.0f64; k];
        for &i in &scored {
            let own = clusters[&labels[i]];
            if sizes[own] == 1 {
                continue;
            }

            sums.iter_mut().for_each(|s| *s = 0.0);
            for &j in &scored {
                if i != j {
                    sums[clusters[&labels[j]]] +=
                        f64::from(util::euclidean(&points[i], &points[j]));
                }
            }

            let a = sums[own] / (sizes[own] - 1) as f64;
            let b = (0..k)
                .filter(|&c| c != own)
                .map(|c| sums[c] / sizes[c] as f64)
                .fold(f64::INFINITY, f64::min);

            let denom = a.max(b);
            if denom > 0.0 {
                total += (b - a) / denom;
            }
        }

        Ok(Some((total / scored.len() as f64) as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_separated_scores_high() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 10.0],
            vec![10.0, 11.0],
        ];
        let score = Silhouette.score(&points, &[1, 1, 2, 2]).unwrap().unwrap();
        assert!(score > 0.9, "score was {score}");
    }

    #[test]
    fn bad_assignment_scores_negative() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 10.0],
            vec![10.0, 11.0],
        ];
        let score = Silhouette.score(&points, &[1, 2, 1, 2]).unwrap().unwrap();
        assert!(score < 0.0, "score was {score}");
    }

    #[test]
    fn single_label_has_no_score() {
        let points = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]];
        assert_eq!(Silhouette.score(&points, &[4, 4, 4]), Ok(None));
    }

    #[test]
    fn noise_is_not_a_label() {
        let points = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]];
        assert_eq!(Silhouette.score(&points, &[0, 0, NOISE]), Ok(None));
        assert_eq!(Silhouette.score(&points, &[NOISE; 3]), Ok(None));
    }

    #[test]
    fn all_singletons_has_no_score() {
        let points = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]];
        assert_eq!(Silhouette.score(&points, &[0, 1, 2]), Ok(None));
    }

    #[test]
    fn length_mismatch_is_invalid() {
        let points = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
        assert!(matches!(
            Silhouette.score(&points, &[0]),
            Err(Error::InvalidInput { .. })
        ));
    }
}
