//! The pairwise similarity matrix.

use rayon::prelude::*;

/// The similarity from the owning row to the observation at `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityRecord {
    /// The similarity, in `(0, 1]`.
    pub similarity: f64,
    /// The column of the cell, i.e. the target observation.
    pub index: usize,
}

/// Converts a distance into a similarity in `(0, 1]`.
#[must_use]
pub fn similarity_from_distance(distance: f64) -> f64 {
    1.0 / (1.0 + distance)
}

/// An `N x N` arena of `SimilarityRecord`s, stored row-major.
///
/// Cells are addressed by `(row, column)` and are never moved or reindexed.
/// Only their similarity values change as the merge loop progresses.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    /// The number of rows, and of columns.
    cardinality: usize,
    /// The cells, row-major.
    cells: Vec<SimilarityRecord>,
}

impl SimilarityMatrix {
    /// Computes the similarity matrix of the given items.
    ///
    /// Every cell, including those below the diagonal, is computed with its
    /// own call to `metric`, so non-symmetric metrics are supported.
    ///
    /// # Arguments
    ///
    /// * `items`: The observations.
    /// * `metric`: A distance function returning a non-negative real.
    pub fn new<I, M: Fn(&I, &I) -> f64>(items: &[I], metric: &M) -> Self {
        let cells = items
            .iter()
            .flat_map(|a| Self::row_of(a, items, metric))
            .collect();
        Self {
            cardinality: items.len(),
            cells,
        }
    }

    /// Parallel version of [`SimilarityMatrix::new`](crate::hac::SimilarityMatrix::new).
    ///
    /// Each row is computed on the rayon thread pool.
    pub fn par_new<I, M>(items: &[I], metric: &M) -> Self
    where
        I: Send + Sync,
        M: (Fn(&I, &I) -> f64) + Send + Sync,
    {
        let rows = items
            .par_iter()
            .map(|a| Self::row_of(a, items, metric).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        Self {
            cardinality: items.len(),
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// The cells of the row owned by `a`.
    fn row_of<'a, I, M: Fn(&I, &I) -> f64>(
        a: &'a I,
        items: &'a [I],
        metric: &'a M,
    ) -> impl Iterator<Item = SimilarityRecord> + 'a {
        items.iter().enumerate().map(move |(index, b)| SimilarityRecord {
            similarity: similarity_from_distance(metric(a, b)),
            index,
        })
    }

    /// The number of observations.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Returns the cells of a row.
    ///
    /// # Panics
    ///
    /// * If `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[SimilarityRecord] {
        let start = row * self.cardinality;
        &self.cells[start..start + self.cardinality]
    }

    /// Returns the cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// * If either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> SimilarityRecord {
        self.cells[self.offset(row, column)]
    }

    /// Returns the similarity at `(row, column)`.
    #[must_use]
    pub fn similarity(&self, row: usize, column: usize) -> f64 {
        self.get(row, column).similarity
    }

    /// Overwrites the similarity at `(row, column)`.
    pub fn set_similarity(&mut self, row: usize, column: usize, similarity: f64) {
        let offset = self.offset(row, column);
        self.cells[offset].similarity = similarity;
    }

    /// The position of `(row, column)` in the arena.
    fn offset(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.cardinality && column < self.cardinality);
        row * self.cardinality + column
    }
}
