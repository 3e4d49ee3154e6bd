//! Shrinking a sequence from one end.

use crate::Boundary;

/// Remove elements from `boundary` until `items` holds at most `target`
/// elements.
///
/// Cropping from [`Boundary::End`] keeps the first `target` elements;
/// cropping from [`Boundary::Start`] keeps the last `target`. Shorter
/// sequences are returned unchanged.
///
/// # Examples
///
/// ```
/// use collection_kit::{Boundary, crop};
///
/// assert_eq!(crop([1, 2, 3, 4, 5], 2, Boundary::Start), vec![4, 5]);
/// assert_eq!(crop([1, 2, 3, 4, 5], 2, Boundary::End), vec![1, 2]);
/// assert_eq!(crop([1], 4, Boundary::End), vec![1]);
/// ```
#[must_use]
pub fn crop<T, I>(items: I, target: usize, boundary: Boundary) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut cropped: Vec<T> = items.into_iter().collect();
    crop_in_place(&mut cropped, target, boundary);
    cropped
}

/// In-place counterpart of [`crop`].
pub fn crop_in_place<T>(items: &mut Vec<T>, target: usize, boundary: Boundary) {
    let Some(excess) = items.len().checked_sub(target) else {
        return;
    };
    match boundary {
        Boundary::End => items.truncate(target),
        Boundary::Start => {
            items.drain(..excess);
        }
    }
}
