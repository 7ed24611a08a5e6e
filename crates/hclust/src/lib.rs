#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod clustering;
pub mod dendrogram;
mod error;
pub mod hac;
mod linkage;
pub mod metric;
mod options;
pub mod utils;

pub use clustering::HierarchicalClustering;
pub use dendrogram::ClusterTree;
pub use error::{HclustError, Result};
pub use hac::MergeSequence;
pub use linkage::Linkage;
pub use metric::Distance;
pub use options::Options;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
