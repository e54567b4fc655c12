//! Cluster arena used by the divisive engine.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

/// A partition of `0..n` into non-empty clusters keyed by id.
///
/// Ids come from a monotonic counter: splitting a cluster retires its id and allocates
/// two fresh ones, so a larger id always means a later cluster. Clusters iterate in
/// ascending id order, which is also creation order.
#[derive(Clone, Debug)]
pub struct ClusterPartition {
    clusters: BTreeMap<usize, Vec<usize>>,
    frozen: BTreeSet<usize>,
    next_id: usize,
    n: usize,
}

impl ClusterPartition {
    /// A single cluster (id 0) holding every index in `0..n`.
    ///
    /// Fails with [`Error::InvalidInput`] for `n == 0`, which would leave cluster 0 empty.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidInput {
                message: "cannot partition an empty point set",
            });
        }
        let mut clusters = BTreeMap::new();
        clusters.insert(0, (0..n).collect());
        Ok(Self {
            clusters,
            frozen: BTreeSet::new(),
            next_id: 1,
            n,
        })
    }

    /// Number of live clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Always false: a partition covers at least one point.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Number of points being partitioned.
    pub fn n_points(&self) -> usize {
        self.n
    }

    /// Members of cluster `id`, in ascending index order.
    pub fn get(&self, id: usize) -> Option<&[usize]> {
        self.clusters.get(&id).map(Vec::as_slice)
    }

    /// Live clusters in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.clusters.iter().map(|(&id, m)| (id, m.as_slice()))
    }

    /// Live clusters that may still be selected for splitting.
    pub fn eligible(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.iter().filter(|(id, _)| !self.frozen.contains(id))
    }

    /// Whether cluster `id` has been certified unsplittable.
    pub fn is_frozen(&self, id: usize) -> bool {
        self.frozen.contains(&id)
    }

    /// Ids of frozen clusters, ascending.
    pub fn frozen(&self) -> impl Iterator<Item = usize> + '_ {
        self.frozen.iter().copied()
    }

    /// Whether any live cluster holds a single point.
    pub fn has_singleton(&self) -> bool {
        self.clusters.values().any(|m| m.len() == 1)
    }

    /// Mark cluster `id` as unsplittable. Unknown ids are ignored.
    pub fn freeze(&mut self, id: usize) {
        if self.clusters.contains_key(&id) {
            self.frozen.insert(id);
        }
    }

    /// Replace cluster `parent` with two new clusters and return their ids.
    ///
    /// `a` receives the lower id. Returns `None` (leaving the partition untouched) if
    /// `parent` is not live, either side is empty, or `a` and `b` together are not exactly
    /// the members of `parent`.
    pub fn replace(
        &mut self,
        parent: usize,
        mut a: Vec<usize>,
        mut b: Vec<usize>,
    ) -> Option<(usize, usize)> {
        if a.is_empty() || b.is_empty() {
            return None;
        }
        let members = self.clusters.get(&parent)?;
        a.sort_unstable();
        b.sort_unstable();
        let mut union: Vec<usize> = a.iter().chain(&b).copied().collect();
        union.sort_unstable();
        if union != *members {
            return None;
        }
        self.clusters.remove(&parent);
        self.frozen.remove(&parent);

        let id_a = self.next_id;
        let id_b = self.next_id + 1;
        self.next_id += 2;
        self.clusters.insert(id_a, a);
        self.clusters.insert(id_b, b);
        Some((id_a, id_b))
    }

    /// Flatten into a label vector: `labels[point] = cluster id`.
    pub fn labels(&self) -> Vec<usize> {
        let mut labels = vec![0usize; self.n];
        for (&id, members) in &self.clusters {
            for &i in members {
                labels[i] = id;
            }
        }
        labels
    }
}
