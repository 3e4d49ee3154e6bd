//! Adaptive resize: crop when too long, pad when too short.

use std::cmp::Ordering;

use tracing::trace;

use crate::Boundary;

use super::{crop_in_place, pad::extend_at};

/// Resize `items` to exactly `target` elements.
///
/// Longer sequences are cropped at `crop_boundary`; shorter ones are padded
/// with `fill` at `pad_boundary`. At most one of the two happens.
///
/// # Examples
///
/// ```
/// use collection_kit::{Boundary, fit};
///
/// let long = fit([1, 2, 3, 4], 2, Boundary::Start, Boundary::End, 0);
/// assert_eq!(long, vec![3, 4]);
///
/// let short = fit([1, 2], 4, Boundary::Start, Boundary::End, 0);
/// assert_eq!(short, vec![1, 2, 0, 0]);
/// ```
#[must_use]
pub fn fit<T, I>(
    items: I,
    target: usize,
    crop_boundary: Boundary,
    pad_boundary: Boundary,
    fill: T,
) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let mut fitted: Vec<T> = items.into_iter().collect();
    fit_in_place(&mut fitted, target, crop_boundary, pad_boundary, fill);
    fitted
}

/// In-place counterpart of [`fit`].
pub fn fit_in_place<T: Clone>(
    items: &mut Vec<T>,
    target: usize,
    crop_boundary: Boundary,
    pad_boundary: Boundary,
    fill: T,
) {
    let len = items.len();
    match len.cmp(&target) {
        Ordering::Greater => {
            trace!(len, target, boundary = %crop_boundary, "fit: cropping");
            crop_in_place(items, target, crop_boundary);
        }
        Ordering::Less => {
            trace!(len, target, boundary = %pad_boundary, "fit: padding");
            extend_at(items, target - len, pad_boundary, fill);
        }
        Ordering::Equal => {}
    }
}
