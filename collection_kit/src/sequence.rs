//! Append, prepend and insert helpers over `Vec`.

use crate::{CollectionError, CollectionResult};

/// Push `values` onto the end of `items`.
pub fn append<T, I>(items: &mut Vec<T>, values: I)
where
    I: IntoIterator<Item = T>,
{
    items.extend(values);
}

/// Insert `values` before the first element of `items`, keeping their order.
///
/// # Examples
///
/// ```
/// let mut path = vec!["usr", "bin"];
/// collection_kit::sequence::prepend(&mut path, ["", "opt"]);
/// assert_eq!(path, ["", "opt", "usr", "bin"]);
/// ```
pub fn prepend<T, I>(items: &mut Vec<T>, values: I)
where
    I: IntoIterator<Item = T>,
{
    let tail = std::mem::take(items);
    items.extend(values);
    items.extend(tail);
}

/// Insert `values` so the first of them lands at `index`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] when `index` is greater than
/// `items.len()`. `items` is unchanged in that case.
///
/// # Examples
///
/// ```
/// use collection_kit::sequence::insert_at;
///
/// let mut digits = vec![1, 4];
/// insert_at(&mut digits, 1, [2, 3])?;
/// assert_eq!(digits, [1, 2, 3, 4]);
/// assert!(insert_at(&mut digits, 9, [0]).is_err());
/// # Ok::<_, collection_kit::CollectionError>(())
/// ```
pub fn insert_at<T, I>(items: &mut Vec<T>, index: usize, values: I) -> CollectionResult<()>
where
    I: IntoIterator<Item = T>,
{
    if index > items.len() {
        return Err(CollectionError::invalid_argument(
            "index",
            format!(
                "index {index} is past the end of a sequence of length {}",
                items.len()
            ),
        ));
    }
    let tail = items.split_off(index);
    items.extend(values);
    items.extend(tail);
    Ok(())
}

/// Owned counterpart of [`append`].
#[must_use]
pub fn appended<T, I, J>(items: I, values: J) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    items.into_iter().chain(values).collect()
}

/// Owned counterpart of [`prepend`].
#[must_use]
pub fn prepended<T, I, J>(items: I, values: J) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    values.into_iter().chain(items).collect()
}
