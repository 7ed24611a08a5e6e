//! The building blocks of the merge loop.

mod engine;
mod matrix;
mod merges;
mod queue;

pub use engine::Engine;
pub use matrix::{similarity_from_distance, SimilarityMatrix, SimilarityRecord};
pub use merges::{Merge, MergeSequence};
pub use queue::CandidateQueue;
