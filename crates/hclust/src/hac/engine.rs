//! The merge loop of efficient hierarchical agglomerative clustering.
//!
//! Adapted from the priority-queue algorithm in Manning, Raghavan and
//! Schütze, *Introduction to Information Retrieval*, 2008, p. 386.

use crate::{utils, Linkage, Result};

use super::{CandidateQueue, Merge, MergeSequence, SimilarityMatrix};

/// Runs the merge loop over a similarity matrix.
///
/// Every row keeps a [`CandidateQueue`] of its similarities to all other
/// active rows. Each step merges the active row whose best candidate is the
/// most similar overall with that candidate, then refreshes the similarities
/// of every remaining row to the merged cluster under the linkage rule.
///
/// The engine is the only owner of the matrix and queues. Once the loop has
/// finished, only the [`MergeSequence`] leaves it.
#[derive(Debug, Clone)]
pub struct Engine {
    /// The similarities, refreshed in place after each merge.
    matrix: SimilarityMatrix,
    /// One candidate queue per row.
    queues: Vec<CandidateQueue>,
    /// Whether each row still represents a cluster.
    active: Vec<bool>,
    /// The linkage rule.
    linkage: Linkage,
    /// The linkage rule, resolved once.
    combine: fn(f64, f64) -> f64,
    /// The merges performed so far.
    merges: Vec<Merge>,
}

impl Engine {
    /// Prepares the merge loop, building one queue per row.
    #[must_use]
    pub fn new(matrix: SimilarityMatrix, linkage: Linkage) -> Self {
        let n = matrix.cardinality();
        let queues = (0..n).map(|row| CandidateQueue::from_row(row, &matrix)).collect();
        Self {
            matrix,
            queues,
            active: vec![true; n],
            linkage,
            combine: linkage.function(),
            merges: Vec::with_capacity(n.saturating_sub(1)),
        }
    }

    /// The linkage rule in use.
    #[must_use]
    pub const fn linkage(&self) -> Linkage {
        self.linkage
    }

    /// The number of observations.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.matrix.cardinality()
    }

    /// The number of rows that still represent a cluster.
    #[must_use]
    pub fn num_active(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Whether `row` still represents a cluster.
    #[must_use]
    pub fn is_active(&self, row: usize) -> bool {
        self.active.get(row).copied().unwrap_or(false)
    }

    /// Whether all merges have been performed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.merges.len() + 1 >= self.cardinality()
    }

    /// The merges performed so far.
    #[must_use]
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// The current similarities.
    #[must_use]
    pub const fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// The candidate queue of `row`.
    #[must_use]
    pub fn queue(&self, row: usize) -> Option<&CandidateQueue> {
        self.queues.get(row)
    }

    /// Performs one merge and returns it, or `None` if all merges have been
    /// performed.
    ///
    /// # Errors
    ///
    /// * `EmptyQueue` if an active row has no candidates, which means the
    ///   queues were corrupted.
    pub fn step(&mut self) -> Result<Option<Merge>> {
        if self.is_done() {
            return Ok(None);
        }

        let scores = self
            .queues
            .iter()
            .zip(self.active.iter())
            .map(|(queue, &active)| {
                if active {
                    queue.max().map(|r| r.similarity)
                } else {
                    Ok(f64::NEG_INFINITY)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        // `scores` is non-empty because there are at least two rows.
        let (left, similarity) = utils::arg_max(&scores).unwrap_or((0, 0.0));
        let right = self.queues[left].max()?.index;

        let merge = Merge {
            left,
            right,
            similarity,
        };
        ftlog::debug!("Merge {}: ({left}, {right}) at similarity {similarity:.6}", self.merges.len());
        self.merges.push(merge);

        self.active[right] = false;
        self.queues[right].reset();
        self.queues[left].reset();

        for i in 0..self.active.len() {
            if !self.active[i] || i == left {
                continue;
            }
            let queue = &mut self.queues[i];
            queue.delete(left);
            queue.delete(right);

            let similarity = (self.combine)(self.matrix.similarity(i, left), self.matrix.similarity(i, right));

            self.matrix.set_similarity(i, left, similarity);
            self.queues[i].insert(&self.matrix, left);

            self.matrix.set_similarity(left, i, similarity);
            self.queues[left].insert(&self.matrix, i);
        }

        Ok(Some(merge))
    }

    /// Performs all remaining merges and returns the full sequence.
    ///
    /// # Errors
    ///
    /// * See [`Engine::step`](crate::hac::Engine::step).
    pub fn run(mut self) -> Result<MergeSequence> {
        ftlog::debug!(
            "Running {} merges over {} observations with {} linkage",
            self.cardinality().saturating_sub(1),
            self.cardinality(),
            self.linkage
        );
        while self.step()?.is_some() {}
        Ok(MergeSequence::new(self.cardinality(), self.merges))
    }
}
