//! Collection helpers with explicit policies.
//!
//! The crate covers four small jobs:
//!
//! * [`pad`], [`crop`] and [`fit`] resize an ordered sequence to an exact
//!   length at a chosen [`Boundary`];
//! * [`combine`] and [`append`] fold key/value mappings under a
//!   [`MergeMode`];
//! * [`is_identical`] and its variants compare two sequences structurally;
//! * [`sequence`] offers append/prepend/insert helpers for `Vec`.
//!
//! Every operation is a synchronous function over caller-owned data. Callers
//! who want the same policies everywhere load a [`Settings`] value and pass
//! it around.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use collection_kit::{Boundary, MergeMode, OverflowPolicy, combine, pad};
//!
//! let row = pad(vec!["id", "name"], 4, Boundary::End, "", OverflowPolicy::Keep)?;
//! assert_eq!(row, ["id", "name", "", ""]);
//!
//! let merged: BTreeMap<_, _> = combine(
//!     [BTreeMap::from([("a", 1)]), BTreeMap::from([("a", 2), ("b", 3)])],
//!     &MergeMode::KeepLeft,
//! )?;
//! assert_eq!(merged, BTreeMap::from([("a", 1), ("b", 3)]));
//! # Ok::<_, collection_kit::CollectionError>(())
//! ```

mod error;
mod identity;
mod merge;
mod policy;
mod resize;
pub mod sequence;
mod settings;

pub use error::{CollectionError, CollectionResult, ResultExt};
pub use identity::{
    AsSequence, IdentityOptions, distinct, is_identical, is_identical_by, is_identical_ignore_case,
};
pub use merge::{
    MergeMode, MergeStrategy, MergeTarget, ROOT_PATH, Resolver, append, combine, combine_json,
    merge_json,
};
pub use policy::{Boundary, OverflowPolicy};
pub use resize::{checked_target, crop, crop_in_place, fit, fit_in_place, pad, pad_in_place};
pub use settings::{ENV_PREFIX, Settings};

pub use serde_json;
