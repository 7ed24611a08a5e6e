//! Utility functions for the crate.

use core::cmp::Ordering;

/// Return the index and value of the maximum value in the given slice of values.
///
/// When several values tie for the maximum, the first of them is returned.
///
/// This will return `None` if the given slice is empty.
pub fn arg_max<T: PartialOrd + Copy>(values: &[T]) -> Option<(usize, T)> {
    values.iter().copied().enumerate().fold(None, |best, (i, v)| match best {
        Some((_, b)) if v.partial_cmp(&b) != Some(Ordering::Greater) => best,
        _ => Some((i, v)),
    })
}
