//! A max-priority queue of merge candidates for a single row of the
//! similarity matrix.

use core::cmp::{Ordering, Reverse};

use distances::Number;
use priority_queue::PriorityQueue;

use crate::{HclustError, Result};

use super::{SimilarityMatrix, SimilarityRecord};

/// Field by which candidates are ranked in the queue.
#[derive(Debug, Clone, Copy)]
struct OrdNumber<U: Number>(U);

impl<U: Number> PartialEq for OrdNumber<U> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Number> Eq for OrdNumber<U> {}

impl<U: Number> PartialOrd for OrdNumber<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Number> Ord for OrdNumber<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Greater)
    }
}

/// The priority of a candidate: its similarity, then its insertion order
/// with earlier insertions ranked higher.
type Priority = (OrdNumber<f64>, Reverse<u64>);

/// The candidates of one row, keyed by column.
///
/// Each candidate is stored with the similarity it had when it was inserted.
/// After a cell of the [`SimilarityMatrix`] changes, the cell must be deleted
/// and re-inserted for the queue to see the new value.
///
/// Among candidates of equal similarity, the one inserted first is returned by
/// [`CandidateQueue::max`].
#[derive(Debug, Clone)]
pub struct CandidateQueue {
    /// The row of the matrix this queue draws its candidates from.
    row: usize,
    /// Column handles, ranked by similarity and then insertion order.
    candidates: PriorityQueue<usize, Priority>,
    /// The insertion counter, for breaking ties.
    sequence: u64,
}

impl CandidateQueue {
    /// Creates an empty queue for `row`.
    #[must_use]
    pub fn new(row: usize) -> Self {
        Self {
            row,
            candidates: PriorityQueue::new(),
            sequence: 0,
        }
    }

    /// Creates a queue holding every cell of `row` except the diagonal,
    /// inserted in ascending column order.
    #[must_use]
    pub fn from_row(row: usize, matrix: &SimilarityMatrix) -> Self {
        let mut queue = Self {
            row,
            candidates: PriorityQueue::with_capacity(matrix.cardinality().saturating_sub(1)),
            sequence: 0,
        };
        for column in (0..matrix.cardinality()).filter(|&c| c != row) {
            queue.insert(matrix, column);
        }
        queue
    }

    /// The row this queue belongs to.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Inserts the cell `(row, column)` with its current similarity.
    ///
    /// The new candidate ranks below any existing candidates of equal
    /// similarity. Inserting a column that is already present replaces it.
    pub fn insert(&mut self, matrix: &SimilarityMatrix, column: usize) {
        let similarity = matrix.similarity(self.row, column);
        self.candidates.push(column, (OrdNumber(similarity), Reverse(self.sequence)));
        self.sequence += 1;
    }

    /// Returns the candidate with the greatest similarity.
    ///
    /// # Errors
    ///
    /// * `EmptyQueue` if there are no candidates.
    pub fn max(&self) -> Result<SimilarityRecord> {
        self.candidates
            .peek()
            .map(|(&index, &(OrdNumber(similarity), _))| SimilarityRecord { similarity, index })
            .ok_or(HclustError::EmptyQueue { row: self.row })
    }

    /// Removes and returns the candidate with the greatest similarity.
    ///
    /// # Errors
    ///
    /// * `EmptyQueue` if there are no candidates.
    pub fn pop_max(&mut self) -> Result<SimilarityRecord> {
        self.candidates
            .pop()
            .map(|(index, (OrdNumber(similarity), _))| SimilarityRecord { similarity, index })
            .ok_or(HclustError::EmptyQueue { row: self.row })
    }

    /// Removes the cell `(row, column)` if it is present.
    pub fn delete(&mut self, column: usize) {
        self.candidates.remove(&column);
    }

    /// Removes all candidates.
    pub fn reset(&mut self) {
        self.candidates.clear();
    }

    /// Whether the cell `(row, column)` is a candidate.
    #[must_use]
    pub fn contains(&self, column: usize) -> bool {
        self.candidates.get_priority(&column).is_some()
    }

    /// The number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether there are no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The column handles, from the lowest ranked to the highest.
    #[must_use]
    pub fn columns(&self) -> Vec<usize> {
        let mut candidates = self.candidates.iter().collect::<Vec<_>>();
        candidates.sort_by(|(_, a), (_, b)| a.cmp(b));
        candidates.into_iter().map(|(&c, _)| c).collect()
    }
}
