//! Linkage rules for combining similarities after a merge.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{HclustError, Result};

/// The accepted identifiers, used in error messages.
const EXPECTED: &str = "\"single\" or \"complete\"";

/// How the similarity between some cluster and a newly merged pair is derived
/// from its similarities to the two halves of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Linkage {
    /// Nearest neighbor: the larger of the two similarities.
    Single,
    /// Farthest neighbor: the smaller of the two similarities.
    #[default]
    Complete,
}

impl Linkage {
    /// All linkage rules.
    pub const ALL: [Self; 2] = [Self::Single, Self::Complete];

    /// The identifier of the linkage rule.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Complete => "complete",
        }
    }

    /// Resolves the rule to a function of the two stale similarities.
    #[must_use]
    pub fn function(&self) -> fn(f64, f64) -> f64 {
        match self {
            Self::Single => f64::max,
            Self::Complete => f64::min,
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Linkage {
    type Err = HclustError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| HclustError::invalid_option("linkage", s, EXPECTED))
    }
}

impl TryFrom<String> for Linkage {
    type Error = HclustError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
