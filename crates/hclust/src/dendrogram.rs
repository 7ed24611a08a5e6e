//! Interpreting a `MergeSequence` as flat clusters or as a binary tree.

use serde::{Deserialize, Serialize};

use crate::{hac::MergeSequence, HclustError, Result};

/// Replays the merges until exactly `k` clusters remain.
///
/// Each cluster lists the original indices of its observations. A merged
/// cluster holds the members of its surviving side followed by those of the
/// absorbed side. Clusters are ordered by their representative's index.
///
/// # Errors
///
/// * `InvalidArgument` if `k` is zero or greater than the number of
///   observations.
/// * `InvalidInput` if the merges refer to unknown or already absorbed
///   observations, or run out before `k` clusters remain.
pub fn flat_clusters(merges: &MergeSequence, k: usize) -> Result<Vec<Vec<usize>>> {
    let n = merges.cardinality();
    if k == 0 || k > n {
        return Err(HclustError::invalid_argument(k, n));
    }

    let mut clusters = (0..n).map(|i| Some(vec![i])).collect::<Vec<_>>();
    let mut remaining = n;
    let mut replay = merges.iter();

    while remaining > k {
        let merge = replay.next().ok_or_else(|| {
            HclustError::invalid_input("The merge sequence ended before reaching the requested number of clusters.")
        })?;
        let right = take_slot(&mut clusters, merge.right)?;
        slot_mut(&mut clusters, merge.left)?.extend(right);
        remaining -= 1;
    }

    Ok(clusters.into_iter().flatten().collect())
}

/// Assigns every observation the position of its cluster in
/// [`flat_clusters`].
///
/// # Errors
///
/// * See [`flat_clusters`].
pub fn labels(merges: &MergeSequence, k: usize) -> Result<Vec<usize>> {
    let mut labels = vec![0; merges.cardinality()];
    for (label, cluster) in flat_clusters(merges, k)?.into_iter().enumerate() {
        for i in cluster {
            labels[i] = label;
        }
    }
    Ok(labels)
}

/// Removes the contents of an occupied slot.
fn take_slot<C>(slots: &mut [Option<C>], index: usize) -> Result<C> {
    slots
        .get_mut(index)
        .and_then(Option::take)
        .ok_or_else(|| stale_index(index))
}

/// Borrows the contents of an occupied slot.
fn slot_mut<C>(slots: &mut [Option<C>], index: usize) -> Result<&mut C> {
    slots
        .get_mut(index)
        .and_then(Option::as_mut)
        .ok_or_else(|| stale_index(index))
}

/// The error for a merge that refers to a missing cluster.
fn stale_index(index: usize) -> HclustError {
    HclustError::invalid_input(format!(
        "The merge sequence refers to observation {index}, which is unknown or was already absorbed."
    ))
}

/// A node of the dendrogram.
///
/// Leaves hold one original observation. Internal nodes own their two
/// children and record the number of observations beneath them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClusterTree<I> {
    /// A single observation.
    Leaf {
        /// The position of the observation in the input.
        index: usize,
        /// The observation.
        observation: I,
        /// Always 1.
        size: usize,
    },
    /// The merge of two subtrees.
    Internal {
        /// The subtree of the surviving representative.
        left: Box<Self>,
        /// The subtree of the absorbed representative.
        right: Box<Self>,
        /// `left.size() + right.size()`.
        size: usize,
        /// The linkage similarity at which the subtrees were merged.
        similarity: f64,
    },
}

impl<I: Clone> ClusterTree<I> {
    /// Builds the dendrogram by folding the merges over one leaf per
    /// observation.
    ///
    /// # Errors
    ///
    /// * `EmptyInput` if there are no observations.
    /// * `InvalidInput` if the number of observations differs from the
    ///   cardinality of the merges, if a merge refers to an unknown or
    ///   already absorbed observation, or if the merges do not join all
    ///   observations into one tree.
    pub fn from_merges(merges: &MergeSequence, observations: &[I]) -> Result<Self> {
        if observations.is_empty() {
            return Err(HclustError::EmptyInput);
        }
        if observations.len() != merges.cardinality() {
            return Err(HclustError::invalid_input(format!(
                "Expected {} observations for the merge sequence, got {}.",
                merges.cardinality(),
                observations.len()
            )));
        }

        let mut nodes = observations
            .iter()
            .enumerate()
            .map(|(index, observation)| {
                Some(Self::Leaf {
                    index,
                    observation: observation.clone(),
                    size: 1,
                })
            })
            .collect::<Vec<_>>();

        for merge in merges {
            let right = take_slot(&mut nodes, merge.right)?;
            let left = take_slot(&mut nodes, merge.left)?;
            let size = left.size() + right.size();
            nodes[merge.left] = Some(Self::Internal {
                left: Box::new(left),
                right: Box::new(right),
                size,
                similarity: merge.similarity,
            });
        }

        let mut roots = nodes.into_iter().flatten();
        match (roots.next(), roots.next()) {
            (Some(root), None) => Ok(root),
            _ => Err(HclustError::invalid_input(
                "The merge sequence does not join all observations into one tree.",
            )),
        }
    }
}

impl<I> ClusterTree<I> {
    /// The number of observations in the subtree.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Leaf { size, .. } | Self::Internal { size, .. } => *size,
        }
    }

    /// Whether this is a single observation.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// The `(left, right)` children of an internal node.
    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Leaf { .. } => None,
            Self::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// The observation of a leaf.
    #[must_use]
    pub const fn observation(&self) -> Option<&I> {
        match self {
            Self::Leaf { observation, .. } => Some(observation),
            Self::Internal { .. } => None,
        }
    }

    /// The merge similarity of an internal node, or `1` for a leaf.
    #[must_use]
    pub fn similarity(&self) -> f64 {
        match self {
            Self::Leaf { .. } => 1.0,
            Self::Internal { similarity, .. } => *similarity,
        }
    }

    /// The indices of the observations in the subtree, from left to right.
    #[must_use]
    pub fn leaves(&self) -> Vec<usize> {
        let mut leaves = Vec::with_capacity(self.size());
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Leaf { index, .. } => leaves.push(*index),
                Self::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        leaves
    }

    /// The number of edges on the longest path from this node to a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some((left, right)) = node.children() {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }
        height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The merges of the six-point example under complete linkage.
    fn six() -> MergeSequence {
        MergeSequence::from_pairs(6, &[(0, 2), (0, 5), (1, 3), (0, 4), (0, 1)])
    }

    #[test]
    fn clusters() {
        let merges = six();
        assert_eq!(flat_clusters(&merges, 2), Ok(vec![vec![0, 2, 5, 4], vec![1, 3]]));
        assert_eq!(flat_clusters(&merges, 3), Ok(vec![vec![0, 2, 5], vec![1, 3], vec![4]]));
        assert_eq!(flat_clusters(&merges, 1), Ok(vec![vec![0, 2, 5, 4, 1, 3]]));
        assert_eq!(
            flat_clusters(&merges, 6),
            Ok((0..6).map(|i| vec![i]).collect::<Vec<_>>())
        );
        assert_eq!(labels(&merges, 3), Ok(vec![0, 1, 0, 1, 2, 0]));
    }

    #[test]
    fn invalid_k() {
        let merges = six();
        assert_eq!(flat_clusters(&merges, 0), Err(HclustError::invalid_argument(0, 6)));
        assert_eq!(flat_clusters(&merges, 7), Err(HclustError::invalid_argument(7, 6)));
        assert!(labels(&merges, 9).is_err());
    }

    #[test]
    fn corrupt_merges() {
        let repeated = MergeSequence::from_pairs(3, &[(0, 1), (2, 1)]);
        assert!(matches!(flat_clusters(&repeated, 1), Err(HclustError::InvalidInput { .. })));
        assert!(matches!(
            ClusterTree::from_merges(&repeated, &[0, 1, 2]),
            Err(HclustError::InvalidInput { .. })
        ));

        let short = MergeSequence::from_pairs(3, &[(0, 1)]);
        assert!(matches!(flat_clusters(&short, 1), Err(HclustError::InvalidInput { .. })));
        assert!(matches!(
            ClusterTree::from_merges(&short, &[0, 1, 2]),
            Err(HclustError::InvalidInput { .. })
        ));

        let out_of_range = MergeSequence::from_pairs(2, &[(0, 5)]);
        assert!(flat_clusters(&out_of_range, 1).is_err());
        assert!(ClusterTree::from_merges(&out_of_range, &[0, 1]).is_err());

        assert!(ClusterTree::from_merges(&six(), &[0, 1, 2]).is_err());
    }

    #[test]
    fn tree() {
        let observations = ['a', 'b', 'c', 'd', 'e', 'f'];
        let root = ClusterTree::from_merges(&six(), &observations).unwrap_or_else(|_| unreachable!());

        assert_eq!(root.size(), 6);
        assert!(!root.is_leaf());
        assert_eq!(root.leaves(), vec![0, 2, 5, 4, 1, 3]);
        assert_eq!(root.height(), 4);

        let (left, right) = root.children().unwrap_or_else(|| unreachable!());
        assert_eq!(left.size(), 4);
        assert_eq!(left.leaves(), vec![0, 2, 5, 4]);
        assert_eq!(right.size(), 2);
        assert_eq!(right.leaves(), vec![1, 3]);

        let (b, d) = right.children().unwrap_or_else(|| unreachable!());
        assert_eq!(b.observation(), Some(&'b'));
        assert_eq!(d.observation(), Some(&'d'));
        assert_eq!(b.size(), 1);
        assert!((b.similarity() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_and_empty() {
        let leaf = ClusterTree::from_merges(&MergeSequence::new(1, Vec::new()), &[7.5]);
        assert_eq!(
            leaf,
            Ok(ClusterTree::Leaf {
                index: 0,
                observation: 7.5,
                size: 1,
            })
        );
        let leaf = leaf.unwrap_or_else(|_| unreachable!());
        assert_eq!(leaf.size(), 1);
        assert_eq!(leaf.height(), 0);
        assert_eq!(leaf.leaves(), vec![0]);

        let empty = ClusterTree::<f64>::from_merges(&MergeSequence::new(0, Vec::new()), &[]);
        assert_eq!(empty, Err(HclustError::EmptyInput));
    }

    #[test]
    fn serialized_sizes() {
        let merges = MergeSequence::from_pairs(2, &[(0, 1)]);
        let root = ClusterTree::from_merges(&merges, &[[1.0], [2.0]]).unwrap_or_else(|_| unreachable!());
        let value = serde_json::to_value(&root).unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(value["Internal"]["size"], 2);
        assert_eq!(value["Internal"]["left"]["Leaf"]["size"], 1);
        assert_eq!(value["Internal"]["right"]["Leaf"]["index"], 1);
        assert_eq!(value["Internal"]["right"]["Leaf"]["observation"], serde_json::json!([2.0]));

        let back: ClusterTree<[f64; 1]> = serde_json::from_value(value).unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(back.size(), 2);
        assert_eq!(back.leaves(), vec![0, 1]);
    }
}
