//! Running a clustering and writing its results.

use std::path::Path;

use hclust::{ClusterTree, HierarchicalClustering, MergeSequence, Options};
use serde::Serialize;

/// The results of a clustering run, as written to disk.
#[derive(Debug, Serialize)]
pub struct Report<T> {
    /// The options the clustering was built with.
    options: Options,
    /// The merges, in order.
    merges: MergeSequence,
    /// The flat clusters, if a number of clusters was requested.
    clusters: Option<Vec<Vec<usize>>>,
    /// The root of the dendrogram.
    tree: ClusterTree<Vec<T>>,
}

/// Clusters `rows` and collects the results.
///
/// # Errors
///
/// * If the data are invalid.
/// * If `num_clusters` is outside `1..=rows.len()`.
pub fn run<T: distances::Number + Serialize>(
    rows: Vec<Vec<T>>,
    options: Options,
    num_clusters: Option<usize>,
    parallel: bool,
) -> Result<Report<T>, String> {
    let start = std::time::Instant::now();
    let clustering = if parallel {
        HierarchicalClustering::par_new(rows, options)
    } else {
        HierarchicalClustering::new(rows, options)
    }
    .map_err(|e| e.to_string())?;
    ftlog::info!("Clustering took {:.6} seconds.", start.elapsed().as_secs_f64());

    let clusters = num_clusters
        .map(|k| clustering.get_clusters(k))
        .transpose()
        .map_err(|e| e.to_string())?;
    let tree = clustering.get_tree().map_err(|e| e.to_string())?;
    ftlog::info!("Dendrogram has height {}.", tree.height());

    Ok(Report {
        options,
        merges: clustering.merges().clone(),
        clusters,
        tree,
    })
}

impl<T: Serialize> Report<T> {
    /// The flat clusters, if any were requested.
    pub fn clusters(&self) -> Option<&[Vec<usize>]> {
        self.clusters.as_deref()
    }

    /// Writes the report as JSON.
    ///
    /// # Errors
    ///
    /// * If the file cannot be created or written.
    pub fn write_to(&self, path: &Path) -> Result<(), String> {
        let file = std::fs::File::create(path).map_err(|e| e.to_string())?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self).map_err(|e| e.to_string())
    }
}
