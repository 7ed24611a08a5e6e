//! The entry point: validate the data, compute similarities and run the
//! merge loop.

use distances::Number;

use crate::{
    dendrogram::{self, ClusterTree},
    hac::{Engine, MergeSequence, SimilarityMatrix},
    HclustError, Options, Result,
};

/// A completed hierarchical clustering of a data matrix.
///
/// The data are validated and clustered eagerly on construction. The handle
/// keeps the data and the [`MergeSequence`], from which flat clusterings and
/// the dendrogram are derived on request.
///
/// # Type Parameters
///
/// - `T`: The type of the elements of the observations.
#[derive(Debug, Clone)]
pub struct HierarchicalClustering<T> {
    /// The observations, one row each.
    data: Vec<Vec<T>>,
    /// The options the clustering was built with.
    options: Options,
    /// The merges, in order.
    merges: MergeSequence,
}

impl<T: Number> HierarchicalClustering<T> {
    /// Clusters the rows of `data`.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` if `data` is empty, has rows of differing lengths,
    ///   has zero-length rows or holds non-finite values.
    pub fn new(data: Vec<Vec<T>>, options: Options) -> Result<Self> {
        validate(&data)?;
        log_start(&data, options);
        let f = options.distance.function::<T>();
        let matrix = SimilarityMatrix::new(&data, &|a: &Vec<T>, b: &Vec<T>| f(a, b));
        Self::finish(data, options, matrix)
    }

    /// Clusters the rows of `data`, computing the similarities in parallel.
    ///
    /// # Errors
    ///
    /// * See [`HierarchicalClustering::new`](crate::HierarchicalClustering::new).
    pub fn par_new(data: Vec<Vec<T>>, options: Options) -> Result<Self> {
        validate(&data)?;
        log_start(&data, options);
        let f = options.distance.function::<T>();
        let matrix = SimilarityMatrix::par_new(&data, &|a: &Vec<T>, b: &Vec<T>| f(a, b));
        Self::finish(data, options, matrix)
    }

    /// Runs the merge loop over the computed similarities.
    fn finish(data: Vec<Vec<T>>, options: Options, matrix: SimilarityMatrix) -> Result<Self> {
        let merges = Engine::new(matrix, options.linkage).run()?;
        ftlog::info!("Finished clustering with {} merges.", merges.len());
        Ok(Self { data, options, merges })
    }

    /// The `k` flat clusters, each a list of row indices.
    ///
    /// Clusters are ordered by their smallest representative index. Within a
    /// cluster, indices appear in the order their clusters were merged.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` unless `1 <= k <= cardinality`.
    pub fn get_clusters(&self, k: usize) -> Result<Vec<Vec<usize>>> {
        dendrogram::flat_clusters(&self.merges, k)
    }

    /// The index of the cluster of every row, for the `k` flat clusters.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` unless `1 <= k <= cardinality`.
    pub fn labels(&self, k: usize) -> Result<Vec<usize>> {
        dendrogram::labels(&self.merges, k)
    }

    /// The root of the dendrogram.
    ///
    /// # Errors
    ///
    /// * Only if the merge sequence is inconsistent with the data, which
    ///   cannot happen for a sequence produced by the merge loop.
    pub fn get_tree(&self) -> Result<ClusterTree<Vec<T>>> {
        ClusterTree::from_merges(&self.merges, &self.data)
    }
}

impl<T> HierarchicalClustering<T> {
    /// The merges, in the order they were performed.
    #[must_use]
    pub const fn merges(&self) -> &MergeSequence {
        &self.merges
    }

    /// The options the clustering was built with.
    #[must_use]
    pub const fn options(&self) -> Options {
        self.options
    }

    /// The observations.
    #[must_use]
    pub fn data(&self) -> &[Vec<T>] {
        &self.data
    }

    /// The number of observations.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.data.len()
    }

    /// The length of every observation.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }
}

/// Checks that `data` is a non-empty rectangular matrix of finite numbers.
fn validate<T: Number>(data: &[Vec<T>]) -> Result<()> {
    let dimensionality = data
        .first()
        .map(Vec::len)
        .ok_or_else(|| HclustError::invalid_input("The data matrix is empty."))?;
    if dimensionality == 0 {
        return Err(HclustError::invalid_input("The observations have zero dimensions."));
    }

    for (i, row) in data.iter().enumerate() {
        if row.len() != dimensionality {
            return Err(HclustError::invalid_input(format!(
                "Row {i} has {} dimensions, expected {dimensionality}.",
                row.len()
            )));
        }
        if let Some(j) = row.iter().position(|x| !x.as_f64().is_finite()) {
            return Err(HclustError::invalid_input(format!(
                "Row {i} holds a non-finite value in column {j}."
            )));
        }
    }

    Ok(())
}

/// Logs the start of a clustering run.
fn log_start<T>(data: &[Vec<T>], options: Options) {
    ftlog::info!(
        "Clustering {} observations of dimension {} with {} linkage and {} distance.",
        data.len(),
        data.first().map_or(0, Vec::len),
        options.linkage,
        options.distance
    );
}
