use crate::error::{Error, Result};

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[inline]
pub(crate) fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    squared_euclidean(a, b).sqrt()
}

/// Check that `data` is a rectangular, finite point set and return its dimensionality.
pub(crate) fn validate_points(data: &[Vec<f32>]) -> Result<usize> {
    let d = match data.first() {
        Some(p) => p.len(),
        None => {
            return Err(Error::InvalidInput {
                message: "empty point set",
            })
        }
    };
    if d == 0 {
        return Err(Error::InvalidInput {
            message: "points must have at least one coordinate",
        });
    }
    for point in data {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
        if point.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidInput {
                message: "coordinates must be finite",
            });
        }
    }
    Ok(d)
}

/// Arithmetic mean of the points selected by `indices`.
///
/// Accumulated in `f64`: every `f32` input is exact there, so members that are
/// equidistant from the true centroid stay tied.
pub(crate) fn centroid(data: &[Vec<f32>], indices: &[usize]) -> Vec<f64> {
    let d = indices.first().map_or(0, |&i| data[i].len());
    let mut sum = vec![0.0f64; d];
    for &i in indices {
        for (s, &x) in sum.iter_mut().zip(&data[i]) {
            *s += f64::from(x);
        }
    }
    let m = indices.len().max(1) as f64;
    for s in &mut sum {
        *s /= m;
    }
    sum
}

/// Euclidean distance from `point` to an `f64` location such as a centroid.
#[inline]
pub(crate) fn euclidean_to(point: &[f32], center: &[f64]) -> f64 {
    debug_assert_eq!(point.len(), center.len());
    point
        .iter()
        .zip(center)
        .map(|(&x, c)| {
            let d = f64::from(x) - c;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_of_square() {
        let data = vec![
            vec![0.0, 0.0],
            vec![2.0, 0.0],
            vec![0.0, 2.0],
            vec![2.0, 2.0],
        ];
        assert_eq!(centroid(&data, &[0, 1, 2, 3]), vec![1.0, 1.0]);
        assert_eq!(centroid(&data, &[1, 3]), vec![2.0, 1.0]);
    }

    #[test]
    fn validate_rejects_bad_points() {
        assert!(validate_points(&[]).is_err());
        assert!(validate_points(&[vec![], vec![]]).is_err());
        assert_eq!(
            validate_points(&[vec![0.0, 0.0], vec![1.0]]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        assert!(validate_points(&[vec![0.0, f32::NAN]]).is_err());
        assert!(validate_points(&[vec![f32::INFINITY, 0.0]]).is_err());
        assert_eq!(validate_points(&[vec![0.0, 1.0]]), Ok(2));
    }

    #[test]
    fn centroid_of_pair_is_equidistant() {
        let data = vec![vec![100.0, 100.0], vec![100.0, 100.4]];
        let c = centroid(&data, &[0, 1]);
        assert_eq!(euclidean_to(&data[0], &c), euclidean_to(&data[1], &c));
    }

    #[test]
    fn euclidean_345() {
        assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
    }
}
