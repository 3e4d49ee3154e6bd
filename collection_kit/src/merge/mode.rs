//! Collision policies for merging mappings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uncased::UncasedStr;

use crate::{CollectionError, CollectionResult};

/// Serialisable collision policy, suitable for configuration files.
///
/// The `rtl` and `ltr` aliases accept the right-to-left and left-to-right
/// spellings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Later sources win.
    #[default]
    #[serde(alias = "rtl")]
    KeepRight,
    /// Earlier sources win.
    #[serde(alias = "ltr")]
    KeepLeft,
    /// Any collision aborts the merge.
    Error,
}

impl MergeStrategy {
    pub(super) const ALL: [Self; 3] = [Self::KeepRight, Self::KeepLeft, Self::Error];

    const fn as_str(self) -> &'static str {
        match self {
            Self::KeepRight => "keep_right",
            Self::KeepLeft => "keep_left",
            Self::Error => "error",
        }
    }

    const fn alias(self) -> Option<&'static str> {
        match self {
            Self::KeepRight => Some("rtl"),
            Self::KeepLeft => Some("ltr"),
            Self::Error => None,
        }
    }

    fn is_named(self, name: &UncasedStr) -> bool {
        name == self.as_str() || self.alias().is_some_and(|alias| name == alias)
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeStrategy {
    type Err = CollectionError;

    fn from_str(s: &str) -> CollectionResult<Self> {
        let name = UncasedStr::new(s.trim());
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.is_named(name))
            .ok_or_else(|| {
                CollectionError::invalid_argument(
                    "merge_strategy",
                    format!("unknown merge strategy '{s}'"),
                )
            })
    }
}

/// Caller-supplied collision resolver: `(key, existing, incoming) -> stored`.
pub type Resolver<'a, K, V> = Box<dyn Fn(&K, V, V) -> V + 'a>;

/// Runtime collision policy used by [`crate::combine`] and
/// [`crate::append`].
///
/// # Examples
///
/// ```
/// use collection_kit::{MergeMode, MergeStrategy};
///
/// let sum: MergeMode<'_, &str, i32> = MergeMode::custom(|_, a, b| a + b);
/// assert_eq!(sum.to_string(), "custom");
///
/// let strict: MergeMode<'_, &str, i32> = MergeStrategy::Error.into();
/// assert!(matches!(strict, MergeMode::Error));
/// ```
pub enum MergeMode<'a, K, V> {
    /// The incoming value replaces the stored one.
    KeepRight,
    /// The stored value is kept and the incoming one discarded.
    KeepLeft,
    /// Collisions fail with [`CollectionError::DuplicateKey`].
    Error,
    /// The resolver decides the stored value.
    Custom(Resolver<'a, K, V>),
}

impl<'a, K, V> MergeMode<'a, K, V> {
    /// Wrap a closure as a [`MergeMode::Custom`] resolver.
    #[must_use]
    pub fn custom<F>(resolve: F) -> Self
    where
        F: Fn(&K, V, V) -> V + 'a,
    {
        Self::Custom(Box::new(resolve))
    }

    /// Short label used in logs and diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::KeepRight => MergeStrategy::KeepRight.as_str(),
            Self::KeepLeft => MergeStrategy::KeepLeft.as_str(),
            Self::Error => MergeStrategy::Error.as_str(),
            Self::Custom(_) => "custom",
        }
    }
}

impl<K, V> Default for MergeMode<'_, K, V> {
    fn default() -> Self {
        Self::KeepRight
    }
}

impl<K, V> From<MergeStrategy> for MergeMode<'_, K, V> {
    fn from(strategy: MergeStrategy) -> Self {
        match strategy {
            MergeStrategy::KeepRight => Self::KeepRight,
            MergeStrategy::KeepLeft => Self::KeepLeft,
            MergeStrategy::Error => Self::Error,
        }
    }
}

impl<K, V> fmt::Display for MergeMode<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<K, V> fmt::Debug for MergeMode<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepRight => f.write_str("KeepRight"),
            Self::KeepLeft => f.write_str("KeepLeft"),
            Self::Error => f.write_str("Error"),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"<resolver>").finish(),
        }
    }
}
