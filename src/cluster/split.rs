//! Farthest-point bisection.
//!
//! # Algorithm
//!
//! 1. Take the centroid of the cluster's members.
//! 2. Find the member farthest from the centroid. Ties go to the first member in index
//!    order, which keeps the split deterministic.
//! 3. Let `threshold` be the mean distance from that farthest member to every member,
//!    its own zero distance included.
//! 4. The farthest member seeds subset A. Every other member joins A when it lies
//!    strictly closer than `threshold` to the seed, otherwise it joins B.
//!
//! Including the zero self-distance in step 3 pulls the threshold down slightly, so
//! borderline members lean towards B.

use super::distance::DistanceMatrix;
use super::util;
use crate::error::{Error, Result};

/// Bisect the cluster `indices` into two non-empty subsets.
///
/// Both subsets preserve the relative order of `indices`. Fails with
/// [`Error::UnsplittableCluster`] if the cluster has fewer than two members or if every
/// member falls on the seed's side.
pub fn split(
    indices: &[usize],
    matrix: &DistanceMatrix,
    data: &[Vec<f32>],
) -> Result<(Vec<usize>, Vec<usize>)> {
    let m = indices.len();
    if m < 2 {
        return Err(Error::UnsplittableCluster { size: m });
    }

    let center = util::centroid(data, indices);

    let mut seed = indices[0];
    let mut seed_dist = f64::NEG_INFINITY;
    for &i in indices {
        let d = util::euclidean_to(&data[i], &center);
        if d > seed_dist {
            seed = i;
            seed_dist = d;
        }
    }

    let row = matrix.row(seed);
    let threshold = indices.iter().map(|&j| f64::from(row[j])).sum::<f64>() / m as f64;

    let mut a = Vec::with_capacity(m);
    let mut b = Vec::with_capacity(m);
    for &i in indices {
        if i == seed || f64::from(row[i]) < threshold {
            a.push(i);
        } else {
            b.push(i);
        }
    }

    if b.is_empty() {
        return Err(Error::UnsplittableCluster { size: m });
    }
    Ok((a, b))
}
