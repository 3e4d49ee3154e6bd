//! Explicitly passed defaults for the collection helpers.
//!
//! [`Settings`] bundles the boundary, overflow, merge and identity policies
//! a caller would otherwise repeat at every call site. Settings are plain
//! values: load them once (see [`Settings::load`]) and pass them where they
//! are needed. Nothing in the crate reads process-wide state.
//!
//! ```rust
//! use collection_kit::{Boundary, Settings};
//!
//! let settings = Settings {
//!     pad_boundary: Boundary::Start,
//!     ..Settings::default()
//! };
//! assert_eq!(settings.fit([7], 3, 0), vec![0, 0, 7]);
//! ```

mod load;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    AsSequence, Boundary, CollectionResult, IdentityOptions, MergeMode, MergeStrategy,
    MergeTarget, OverflowPolicy,
};

pub use load::ENV_PREFIX;

/// Default policies applied by the convenience methods below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where [`Settings::pad`] and [`Settings::fit`] insert fill values.
    pub pad_boundary: Boundary,
    /// Where [`Settings::crop`] and [`Settings::fit`] remove elements.
    pub crop_boundary: Boundary,
    /// How [`Settings::pad`] treats sequences longer than the target.
    pub overflow: OverflowPolicy,
    /// Collision policy for [`Settings::combine`].
    pub merge: MergeStrategy,
    /// Flags for [`Settings::is_identical`].
    pub identity: IdentityOptions,
}

impl Settings {
    /// [`crate::pad`] with the configured boundary and overflow policy.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::CollectionError::InvalidArgument`] from
    /// [`crate::pad`].
    pub fn pad<T, I>(&self, items: I, target: usize, fill: T) -> CollectionResult<Vec<T>>
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        crate::pad(items, target, self.pad_boundary, fill, self.overflow)
    }

    /// [`crate::crop`] with the configured crop boundary.
    #[must_use]
    pub fn crop<T, I>(&self, items: I, target: usize) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        crate::crop(items, target, self.crop_boundary)
    }

    /// [`crate::fit`] with the configured boundaries.
    #[must_use]
    pub fn fit<T, I>(&self, items: I, target: usize, fill: T) -> Vec<T>
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        crate::fit(items, target, self.crop_boundary, self.pad_boundary, fill)
    }

    /// [`crate::combine`] with the configured merge strategy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CollectionError::DuplicateKey`] when the strategy is
    /// [`MergeStrategy::Error`] and two sources share a key.
    pub fn combine<M, K, V, I, S>(&self, sources: I) -> CollectionResult<M>
    where
        M: MergeTarget<K, V>,
        K: fmt::Debug,
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = (K, V)>,
    {
        crate::combine(sources, &MergeMode::from(self.merge))
    }

    /// [`crate::is_identical`] with the configured identity options.
    #[must_use]
    pub fn is_identical<T, A, B>(&self, a: &A, b: &B) -> bool
    where
        T: PartialEq,
        A: AsSequence<Item = T> + ?Sized,
        B: AsSequence<Item = T> + ?Sized,
    {
        crate::is_identical(a, b, self.identity)
    }
}
