//! Conversions between external error types and `CollectionError`.

use figment::Error as FigmentError;

use super::{CollectionError, CollectionResult};

impl From<FigmentError> for CollectionError {
    fn from(e: FigmentError) -> Self {
        Self::config(e)
    }
}

/// Extension for mapping any `Result<T, E>` with `E: Into<CollectionError>`
/// into a [`CollectionResult`].
pub trait ResultExt<T> {
    /// Convert `Result<T, E>` into `CollectionResult<T>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion.
    fn into_collection(self) -> CollectionResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<CollectionError>,
{
    fn into_collection(self) -> CollectionResult<T> {
        self.map_err(Into::into)
    }
}
