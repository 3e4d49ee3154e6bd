//! Growing a sequence with fill values.

use std::iter;

use crate::{Boundary, CollectionError, CollectionResult, OverflowPolicy};

/// Pad `items` with clones of `fill` at `boundary` until it holds `target`
/// elements.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] when `overflow` is
/// [`OverflowPolicy::Reject`] and the sequence is already longer than
/// `target`.
///
/// # Examples
///
/// ```
/// use collection_kit::{Boundary, OverflowPolicy, pad};
///
/// let tags = pad(Vec::<&str>::new(), 3, Boundary::Start, "x", OverflowPolicy::Keep)?;
/// assert_eq!(tags, ["x", "x", "x"]);
///
/// let long = pad([1, 2, 3], 2, Boundary::End, 0, OverflowPolicy::Reject);
/// assert!(long.is_err());
/// # Ok::<_, collection_kit::CollectionError>(())
/// ```
pub fn pad<T, I>(
    items: I,
    target: usize,
    boundary: Boundary,
    fill: T,
    overflow: OverflowPolicy,
) -> CollectionResult<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let mut padded: Vec<T> = items.into_iter().collect();
    pad_in_place(&mut padded, target, boundary, fill, overflow)?;
    Ok(padded)
}

/// In-place counterpart of [`pad`].
///
/// The vector is left untouched when an error is returned.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] under
/// [`OverflowPolicy::Reject`] when `items.len() > target`.
pub fn pad_in_place<T: Clone>(
    items: &mut Vec<T>,
    target: usize,
    boundary: Boundary,
    fill: T,
    overflow: OverflowPolicy,
) -> CollectionResult<()> {
    let len = items.len();
    if len > target {
        return match overflow {
            OverflowPolicy::Keep => Ok(()),
            OverflowPolicy::Reject => Err(CollectionError::invalid_argument(
                "items",
                format!("sequence of length {len} already exceeds target size {target}"),
            )),
        };
    }
    extend_at(items, target - len, boundary, fill);
    Ok(())
}

/// Insert `count` clones of `fill` at `boundary`.
pub(super) fn extend_at<T: Clone>(items: &mut Vec<T>, count: usize, boundary: Boundary, fill: T) {
    if count == 0 {
        return;
    }
    let fills = iter::repeat_n(fill, count);
    match boundary {
        Boundary::End => items.extend(fills),
        Boundary::Start => {
            let mut grown = Vec::with_capacity(items.len() + count);
            grown.extend(fills);
            grown.append(items);
            *items = grown;
        }
    }
}
