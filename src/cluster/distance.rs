//! Dense pairwise distance matrix.

use super::util;
use crate::error::{Error, Result};

/// Pairwise Euclidean distances over a point set.
///
/// Stored row-major in a flat buffer. Symmetric with a zero diagonal, and read-only once
/// built.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    n: usize,
    dists: Vec<f32>,
}

impl DistanceMatrix {
    /// Compute all pairwise distances over `data`.
    ///
    /// Fails with [`Error::InvalidInput`] for fewer than two points or non-finite
    /// coordinates, and with [`Error::DimensionMismatch`] for a ragged point set.
    pub fn build(data: &[Vec<f32>]) -> Result<Self> {
        let n = data.len();
        if n < 2 {
            return Err(Error::InvalidInput {
                message: "at least two points are required",
            });
        }
        util::validate_points(data)?;

        let mut dists = vec![0.0f32; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = util::euclidean(&data[i], &data[j]);
                dists[i * n + j] = d;
                dists[j * n + i] = d;
            }
        }
        Ok(Self { n, dists })
    }

    /// Number of points the matrix was built over.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: a matrix is only built over two or more points.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.dists[i * self.n + j]
    }

    /// Distances from point `i` to every point.
    #[inline]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.dists[i * self.n..(i + 1) * self.n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_with_zero_diagonal() {
        let data = vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![6.0, 8.0]];
        let m = DistanceMatrix::build(&data).unwrap();

        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert_eq!(m.get(0, 1), 5.0);
        assert_eq!(m.get(0, 2), 10.0);
        assert_eq!(m.row(1), &[5.0, 0.0, 5.0]);
    }

    #[test]
    fn rejects_single_point() {
        let result = DistanceMatrix::build(&[vec![1.0, 1.0]]);
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn rejects_non_finite() {
        let data = vec![vec![0.0, 0.0], vec![f32::NAN, 1.0]];
        assert!(matches!(
            DistanceMatrix::build(&data),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_ragged() {
        let data = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(
            DistanceMatrix::build(&data),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
