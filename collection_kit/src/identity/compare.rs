//! Equality checks over ordered sequences.

use super::{AsSequence, IdentityOptions};

/// Compare two sequences with `PartialEq`.
///
/// See [`is_identical_by`] for the rules.
#[must_use]
pub fn is_identical<T, A, B>(a: &A, b: &B, options: IdentityOptions) -> bool
where
    T: PartialEq,
    A: AsSequence<Item = T> + ?Sized,
    B: AsSequence<Item = T> + ?Sized,
{
    is_identical_by(a, b, options, |x: &T, y: &T| x == y)
}

/// Compare two sequences with a caller-supplied equality.
///
/// * Two empty sequences are identical.
/// * Sequences of different length (after distinct reduction, when
///   requested) are not, and no element is inspected.
/// * Ordered comparison checks elements index by index.
/// * Unordered comparison requires every element of `a` to occur in `b`,
///   and, unless `distinct_only` is set, every element of `b` to occur in
///   `a`. Multiplicity is not counted.
///
/// # Examples
///
/// ```
/// use collection_kit::{IdentityOptions, is_identical_by};
///
/// let by_len = |x: &&str, y: &&str| x.len() == y.len();
/// assert!(is_identical_by(&["ab", "c"], &["x", "yz"], IdentityOptions::unordered(), by_len));
/// ```
#[must_use]
pub fn is_identical_by<T, A, B, F>(a: &A, b: &B, options: IdentityOptions, eq: F) -> bool
where
    A: AsSequence<Item = T> + ?Sized,
    B: AsSequence<Item = T> + ?Sized,
    F: Fn(&T, &T) -> bool,
{
    let (left, right) = (a.as_sequence(), b.as_sequence());
    if options.distinct_only {
        let (left_unique, right_unique) = (distinct(left, &eq), distinct(right, &eq));
        compare(
            &left_unique,
            &right_unique,
            options.ignore_order,
            false,
            |x: &&T, y: &&T| eq(*x, *y),
        )
    } else {
        compare(left, right, options.ignore_order, true, &eq)
    }
}

/// Compare two string sequences ignoring case.
///
/// Both sides are folded through Unicode uppercase mapping, so `"ärger"`
/// matches `"ÄRGER"` and a final `ς` matches `Σ`. ASCII-only pairs take a
/// fast path.
///
/// # Examples
///
/// ```
/// use collection_kit::{IdentityOptions, is_identical_ignore_case};
///
/// let left = vec!["Alpha".to_owned(), "BETA".to_owned()];
/// let right = vec!["beta".to_owned(), "alpha".to_owned()];
/// assert!(is_identical_ignore_case(&left, &right, IdentityOptions::unordered()));
/// ```
#[must_use]
pub fn is_identical_ignore_case<T, A, B>(a: &A, b: &B, options: IdentityOptions) -> bool
where
    T: AsRef<str>,
    A: AsSequence<Item = T> + ?Sized,
    B: AsSequence<Item = T> + ?Sized,
{
    is_identical_by(a, b, options, |x: &T, y: &T| {
        eq_ignore_case(x.as_ref(), y.as_ref())
    })
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }
    folded(left).eq(folded(right))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_uppercase)
}

/// Keep the first occurrence of each value, preserving order.
///
/// # Examples
///
/// ```
/// use collection_kit::distinct;
///
/// let unique = distinct(&[3, 1, 3, 2, 1], |a, b| a == b);
/// assert_eq!(unique, [&3, &1, &2]);
/// ```
#[must_use]
pub fn distinct<T, F>(items: &[T], eq: F) -> Vec<&T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut unique: Vec<&T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|seen| eq(*seen, item)) {
            unique.push(item);
        }
    }
    unique
}

fn compare<U, F>(a: &[U], b: &[U], ignore_order: bool, bidirectional: bool, eq: F) -> bool
where
    F: Fn(&U, &U) -> bool,
{
    if a.len() != b.len() {
        return false;
    }
    if !ignore_order {
        return a.iter().zip(b).all(|(x, y)| eq(x, y));
    }
    let contains = |haystack: &[U], needle: &U| haystack.iter().any(|item| eq(needle, item));
    a.iter().all(|x| contains(b, x)) && (!bidirectional || b.iter().all(|y| contains(a, y)))
}
