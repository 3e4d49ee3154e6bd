//! Structural equality between two sequences.
//!
//! Comparisons accept anything implementing [`AsSequence`], so slices,
//! arrays, vectors and optional collections mix freely. A missing
//! collection (`None`) compares like an empty one.
//!
//! ```rust
//! use collection_kit::{IdentityOptions, is_identical};
//!
//! let unordered = IdentityOptions::unordered();
//! assert!(is_identical(&[1, 2, 3], &vec![3, 2, 1], unordered));
//! assert!(!is_identical(&[1, 2, 3], &[3, 2, 1], IdentityOptions::ordered()));
//! assert!(is_identical(&None::<Vec<u8>>, &Vec::<u8>::new(), IdentityOptions::ordered()));
//! ```

mod compare;
mod source;

pub use compare::{distinct, is_identical, is_identical_by, is_identical_ignore_case};
pub use source::AsSequence;

use serde::{Deserialize, Serialize};

/// Flags controlling [`is_identical`] and its variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityOptions {
    /// Compare as collections rather than position by position.
    pub ignore_order: bool,
    /// Reduce both sides to their distinct values before comparing.
    pub distinct_only: bool,
}

impl IdentityOptions {
    /// Position-wise comparison of every element.
    #[must_use]
    pub const fn ordered() -> Self {
        Self {
            ignore_order: false,
            distinct_only: false,
        }
    }

    /// Order-insensitive comparison of every element.
    #[must_use]
    pub const fn unordered() -> Self {
        Self {
            ignore_order: true,
            distinct_only: false,
        }
    }

    /// Enable distinct-only comparison.
    #[must_use]
    pub const fn with_distinct_only(mut self) -> Self {
        self.distinct_only = true;
        self
    }
}

#[cfg(test)]
mod tests;
