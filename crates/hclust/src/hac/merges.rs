//! The record of merges produced by the merge loop.

use serde::{Deserialize, Serialize};

/// A single merge: the cluster represented by `right` was absorbed into the
/// cluster represented by `left`, which keeps representing the union.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Merge {
    /// The surviving representative.
    pub left: usize,
    /// The absorbed representative.
    pub right: usize,
    /// The linkage similarity of the two clusters when they were merged.
    pub similarity: f64,
}

impl Merge {
    /// The merged pair as `(left, right)`.
    #[must_use]
    pub const fn pair(&self) -> (usize, usize) {
        (self.left, self.right)
    }
}

/// The merges of a clustering, in the order they were performed.
///
/// A complete sequence over `N` observations holds `N - 1` merges (none when
/// `N <= 1`) and fully determines both the flat clusterings and the
/// dendrogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeSequence {
    /// The number of observations that were clustered.
    cardinality: usize,
    /// The merges.
    merges: Vec<Merge>,
}

impl MergeSequence {
    /// Wraps the merges performed over `cardinality` observations.
    #[must_use]
    pub const fn new(cardinality: usize, merges: Vec<Merge>) -> Self {
        Self { cardinality, merges }
    }

    /// Builds a sequence from `(left, right)` pairs with unknown similarities.
    ///
    /// The similarities are recorded as `NAN`.
    #[must_use]
    pub fn from_pairs(cardinality: usize, pairs: &[(usize, usize)]) -> Self {
        let merges = pairs
            .iter()
            .map(|&(left, right)| Merge {
                left,
                right,
                similarity: f64::NAN,
            })
            .collect();
        Self { cardinality, merges }
    }

    /// The number of observations that were clustered.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// The number of merges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Whether no merges were performed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// The merges, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Merge] {
        &self.merges
    }

    /// Iterates over the merges, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Merge> {
        self.merges.iter()
    }

    /// The merged pairs, in order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.merges.iter().map(Merge::pair).collect()
    }
}

impl<'a> IntoIterator for &'a MergeSequence {
    type Item = &'a Merge;
    type IntoIter = core::slice::Iter<'a, Merge>;

    fn into_iter(self) -> Self::IntoIter {
        self.merges.iter()
    }
}
