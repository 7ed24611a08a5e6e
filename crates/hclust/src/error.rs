//! Error types for hierarchical clustering.

use thiserror::Error;

/// Errors that can occur while building or interpreting a clustering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HclustError {
    /// The data matrix is empty, ragged, zero-dimensional or holds
    /// non-finite values.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What is wrong with the data.
        message: String,
    },

    /// An unrecognized linkage or distance identifier.
    #[error("Invalid option: {option} must be one of {expected}, got `{value}`")]
    InvalidOption {
        /// The name of the option.
        option: &'static str,
        /// The rejected value.
        value: String,
        /// The accepted values.
        expected: &'static str,
    },

    /// A requested number of clusters outside of `1..=cardinality`.
    #[error("Invalid argument: the number of clusters must be in 1..={max}, got {k}")]
    InvalidArgument {
        /// The requested number of clusters.
        k: usize,
        /// The number of observations.
        max: usize,
    },

    /// A dendrogram was requested over zero observations.
    #[error("Cannot build a dendrogram over zero observations")]
    EmptyInput,

    /// The maximum of a candidate queue with no candidates was requested.
    ///
    /// This signals broken bookkeeping in the merge loop, never bad user
    /// input.
    #[error("Candidate queue of row {row} is empty")]
    EmptyQueue {
        /// The row owning the queue.
        row: usize,
    },
}

impl HclustError {
    /// Create an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an `InvalidOption` error.
    pub fn invalid_option(option: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidOption {
            option,
            value: value.into(),
            expected,
        }
    }

    /// Create an `InvalidArgument` error.
    #[must_use]
    pub const fn invalid_argument(k: usize, max: usize) -> Self {
        Self::InvalidArgument { k, max }
    }
}

/// Result type for clustering operations.
pub type Result<T> = std::result::Result<T, HclustError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = HclustError::invalid_input("The data matrix is empty.");
        assert_eq!(err.to_string(), "Invalid input: The data matrix is empty.");

        let err = HclustError::invalid_option("linkage", "centroid", "\"single\" or \"complete\"");
        assert_eq!(
            err.to_string(),
            "Invalid option: linkage must be one of \"single\" or \"complete\", got `centroid`"
        );

        let err = HclustError::invalid_argument(7, 6);
        assert_eq!(
            err.to_string(),
            "Invalid argument: the number of clusters must be in 1..=6, got 7"
        );

        assert_eq!(
            HclustError::EmptyQueue { row: 3 }.to_string(),
            "Candidate queue of row 3 is empty"
        );
    }
}
