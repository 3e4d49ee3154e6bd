//! Folding key/value mappings under an explicit collision policy.
//!
//! [`MergeStrategy`] is the serialisable policy carried by
//! [`crate::Settings`]; [`MergeMode`] adds the [`MergeMode::Custom`]
//! resolver for callers that need to combine or derive values. Sources are
//! always processed left to right.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use collection_kit::{CollectionError, MergeMode, combine};
//!
//! let err = combine::<BTreeMap<_, _>, _, _, _, _>(
//!     [BTreeMap::from([("a", 1)]), BTreeMap::from([("a", 2)])],
//!     &MergeMode::Error,
//! )
//! .unwrap_err();
//! assert!(matches!(err, CollectionError::DuplicateKey { source_index: 1, .. }));
//! ```

mod combine;
mod json;
mod mode;
mod target;

pub use combine::{append, combine};
pub use json::{ROOT_PATH, combine_json, merge_json};
pub use mode::{MergeMode, MergeStrategy, Resolver};
pub use target::MergeTarget;
