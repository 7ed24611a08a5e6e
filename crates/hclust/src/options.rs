//! Configuration of a clustering run.

use serde::{Deserialize, Serialize};

use crate::{Distance, Linkage, Result};

/// The options recognized by [`HierarchicalClustering`](crate::HierarchicalClustering).
///
/// Missing fields take their defaults when deserializing, so an empty
/// configuration means complete linkage with the Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// The linkage rule. Defaults to `complete`.
    pub linkage: Linkage,
    /// The distance function. Defaults to `euclidean`.
    pub distance: Distance,
}

impl Options {
    /// Parses options from their identifiers. `None` selects the default.
    ///
    /// # Errors
    ///
    /// * `InvalidOption` if either identifier is not recognized.
    pub fn from_names(linkage: Option<&str>, distance: Option<&str>) -> Result<Self> {
        Ok(Self {
            linkage: linkage.map(str::parse::<Linkage>).transpose()?.unwrap_or_default(),
            distance: distance.map(str::parse::<Distance>).transpose()?.unwrap_or_default(),
        })
    }

    /// Sets the linkage rule.
    #[must_use]
    pub const fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = linkage;
        self
    }

    /// Sets the distance function.
    #[must_use]
    pub const fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }
}
