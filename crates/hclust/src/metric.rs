//! The distance functions available for computing similarities.
//!
//! A distance function is any pure function of two equal-length vectors
//! returning a non-negative real, with zero for identical vectors. The
//! [`Distance`] enum names the built-in ones and resolves them to plain
//! function pointers once, before any clustering work starts.

use core::{fmt, str::FromStr};

use distances::Number;
use serde::{Deserialize, Serialize};

use crate::{HclustError, Result};

/// The accepted identifiers, used in error messages.
const EXPECTED: &str = "\"chebyshev\", \"cosine\", \"euclidean\", \"hamming\" or \"manhattan\"";

/// The built-in distance functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Distance {
    /// The largest absolute difference along any dimension.
    Chebyshev,
    /// One minus the cosine similarity.
    Cosine,
    /// The L2 norm of the difference.
    #[default]
    Euclidean,
    /// The number of positions at which the vectors differ.
    Hamming,
    /// The L1 norm of the difference.
    Manhattan,
}

impl Distance {
    /// All built-in distance functions.
    pub const ALL: [Self; 5] = [
        Self::Chebyshev,
        Self::Cosine,
        Self::Euclidean,
        Self::Hamming,
        Self::Manhattan,
    ];

    /// The identifier of the distance function.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Chebyshev => "chebyshev",
            Self::Cosine => "cosine",
            Self::Euclidean => "euclidean",
            Self::Hamming => "hamming",
            Self::Manhattan => "manhattan",
        }
    }

    /// Resolves the distance function for vectors of `T`.
    #[must_use]
    pub fn function<T: Number>(&self) -> fn(&[T], &[T]) -> f64 {
        match self {
            Self::Chebyshev => chebyshev::<T>,
            Self::Cosine => cosine::<T>,
            Self::Euclidean => euclidean::<T>,
            Self::Hamming => hamming::<T>,
            Self::Manhattan => manhattan::<T>,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distance {
    type Err = HclustError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| HclustError::invalid_option("distance", s, EXPECTED))
    }
}

impl TryFrom<String> for Distance {
    type Error = HclustError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Euclidean distance, via the `distances` crate.
fn euclidean<T: Number>(x: &[T], y: &[T]) -> f64 {
    distances::vectors::euclidean::<T, f64>(x, y)
}

/// Manhattan distance, via the `distances` crate.
fn manhattan<T: Number>(x: &[T], y: &[T]) -> f64 {
    distances::vectors::manhattan(x, y).as_f64()
}

/// Chebyshev distance, via the `distances` crate.
fn chebyshev<T: Number>(x: &[T], y: &[T]) -> f64 {
    distances::vectors::chebyshev(x, y).as_f64()
}

/// Cosine distance, `1 - cos(x, y)`, in `[0, 2]`.
///
/// `distances::vectors::cosine` clamps every pair with a negative dot product
/// to 1, which would rank opposite vectors as close as orthogonal ones. Zero
/// vectors are still at distance 1 from everything.
fn cosine<T: Number>(x: &[T], y: &[T]) -> f64 {
    let [xx, yy, xy] = x.iter().zip(y).fold([0.0_f64; 3], |[xx, yy, xy], (&a, &b)| {
        let (a, b) = (a.as_f64(), b.as_f64());
        [a.mul_add(a, xx), b.mul_add(b, yy), a.mul_add(b, xy)]
    });

    if xx < f64::EPSILON || yy < f64::EPSILON {
        1.0
    } else {
        let d = 1.0 - xy / (xx * yy).sqrt();
        if d < f64::EPSILON {
            0.0
        } else {
            d.min(2.0)
        }
    }
}

/// Hamming distance over arbitrary numbers.
///
/// `distances::vectors::hamming` only accepts integers, so floats are compared
/// element-wise here.
fn hamming<T: Number>(x: &[T], y: &[T]) -> f64 {
    x.iter().zip(y).filter(|(a, b)| a != b).count().as_f64()
}
