//! Command-line names for the clustering options.

use hclust::{Distance, Linkage};

/// The linkage rules available in the CLI.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum ShellLinkage {
    #[clap(name = "single")]
    Single,
    #[clap(name = "complete")]
    Complete,
}

impl From<ShellLinkage> for Linkage {
    fn from(linkage: ShellLinkage) -> Self {
        match linkage {
            ShellLinkage::Single => Self::Single,
            ShellLinkage::Complete => Self::Complete,
        }
    }
}

/// The distance functions available in the CLI.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum ShellDistance {
    #[clap(name = "euclidean")]
    Euclidean,
    #[clap(name = "manhattan")]
    Manhattan,
    #[clap(name = "chebyshev")]
    Chebyshev,
    #[clap(name = "cosine")]
    Cosine,
    #[clap(name = "hamming")]
    Hamming,
}

impl From<ShellDistance> for Distance {
    fn from(distance: ShellDistance) -> Self {
        match distance {
            ShellDistance::Euclidean => Self::Euclidean,
            ShellDistance::Manhattan => Self::Manhattan,
            ShellDistance::Chebyshev => Self::Chebyshev,
            ShellDistance::Cosine => Self::Cosine,
            ShellDistance::Hamming => Self::Hamming,
        }
    }
}
