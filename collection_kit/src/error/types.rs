//! Primary error enum for resize, merge and settings flows.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while reshaping, merging or configuring
/// collections.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CollectionError {
    /// A call parameter was malformed, for example a negative target size
    /// or a sequence that already exceeds a capped target.
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// A key appeared in more than one source while merging under
    /// [`crate::MergeMode::Error`].
    #[error("duplicate key {key} in merge source #{source_index}")]
    DuplicateKey {
        /// Debug rendering of the conflicting key.
        key: String,
        /// Zero-based position of the source that introduced the collision.
        source_index: usize,
    },

    /// Settings could not be gathered or extracted.
    #[error("failed to load collection settings: {0}")]
    Config(#[from] Box<FigmentError>),
}
