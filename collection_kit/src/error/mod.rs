//! Error types produced by the collection helpers.

mod constructors;
mod conversions;
mod types;

pub use conversions::ResultExt;
pub use types::CollectionError;

/// Result alias used throughout the crate.
pub type CollectionResult<T> = Result<T, CollectionError>;
