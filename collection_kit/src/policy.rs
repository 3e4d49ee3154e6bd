//! Value types describing where a resize happens and how overflow is treated.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uncased::UncasedStr;

use crate::{CollectionError, CollectionResult};

/// End of an ordered sequence affected by a pad or crop.
///
/// # Examples
///
/// ```
/// use collection_kit::Boundary;
///
/// assert_eq!("START".parse::<Boundary>().ok(), Some(Boundary::Start));
/// assert_eq!(Boundary::default().to_string(), "end");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Index zero.
    Start,
    /// One past the last element.
    #[default]
    End,
}

impl Boundary {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Boundary {
    type Err = CollectionError;

    fn from_str(s: &str) -> CollectionResult<Self> {
        let name = UncasedStr::new(s.trim());
        [Self::Start, Self::End]
            .into_iter()
            .find(|candidate| name == candidate.as_str())
            .ok_or_else(|| {
                CollectionError::invalid_argument(
                    "boundary",
                    format!("expected 'start' or 'end', found '{s}'"),
                )
            })
    }
}

/// What [`crate::pad`] does with a sequence already longer than its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Leave the sequence untouched.
    #[default]
    Keep,
    /// Fail with [`CollectionError::InvalidArgument`].
    Reject,
}
