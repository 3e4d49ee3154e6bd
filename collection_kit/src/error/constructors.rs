//! Constructors for `CollectionError`.

use std::fmt;

use figment::Error as FigmentError;

use super::CollectionError;

impl CollectionError {
    /// Construct an [`CollectionError::InvalidArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use collection_kit::CollectionError;
    /// let e = CollectionError::invalid_argument("target", "must not be negative");
    /// assert_eq!(e.to_string(), "invalid argument 'target': must not be negative");
    /// ```
    #[must_use]
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Construct a [`CollectionError::DuplicateKey`] from any debuggable key.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection_kit::CollectionError;
    /// let e = CollectionError::duplicate_key(&"a", 1);
    /// assert!(matches!(e, CollectionError::DuplicateKey { source_index: 1, .. }));
    /// assert_eq!(e.to_string(), "duplicate key \"a\" in merge source #1");
    /// ```
    #[must_use]
    pub fn duplicate_key<K: fmt::Debug + ?Sized>(key: &K, source_index: usize) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
            source_index,
        }
    }

    /// Construct a [`CollectionError::Config`] from a [`figment::Error`].
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }

    /// Returns `true` when the error reports a merge collision.
    #[must_use]
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}
