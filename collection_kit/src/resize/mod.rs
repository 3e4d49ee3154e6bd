//! Pad, crop and fit ordered sequences to an exact length.
//!
//! Every operation comes in two shapes: an owned form that consumes any
//! [`IntoIterator`] and returns a fresh [`Vec`], and an `_in_place` form that
//! rewrites a caller-owned `Vec`. Pick the one matching the ownership you
//! hold; the observable result is identical.
//!
//! ```rust
//! use collection_kit::{Boundary, OverflowPolicy, crop, fit, pad};
//!
//! let padded = pad([1, 2], 5, Boundary::End, 0, OverflowPolicy::Keep)?;
//! assert_eq!(padded, vec![1, 2, 0, 0, 0]);
//!
//! assert_eq!(crop([1, 2, 3, 4, 5], 2, Boundary::Start), vec![4, 5]);
//! assert_eq!(fit(vec!['a'], 3, Boundary::End, Boundary::Start, '-'), vec!['-', '-', 'a']);
//! # Ok::<_, collection_kit::CollectionError>(())
//! ```

mod crop;
mod fit;
mod pad;

pub use crop::{crop, crop_in_place};
pub use fit::{fit, fit_in_place};
pub use pad::{pad, pad_in_place};

use crate::{CollectionError, CollectionResult};

/// Validate a signed target size, rejecting negative values.
///
/// The resize functions take `usize` targets, so callers holding signed
/// sizes (from configuration, arithmetic or foreign interfaces) convert
/// through this function before any length is inspected.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] when `requested` is negative
/// or does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use collection_kit::checked_target;
/// assert_eq!(checked_target(3).ok(), Some(3));
/// assert!(checked_target(-1).is_err());
/// ```
pub fn checked_target(requested: i64) -> CollectionResult<usize> {
    if requested < 0 {
        return Err(CollectionError::invalid_argument(
            "target",
            format!("target size must not be negative, got {requested}"),
        ));
    }
    usize::try_from(requested).map_err(|_| {
        CollectionError::invalid_argument(
            "target",
            format!("target size {requested} does not fit in usize"),
        )
    })
}

#[cfg(test)]
mod tests;
