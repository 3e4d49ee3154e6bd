//! Folding mapping sources under a collision policy.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::{CollectionError, CollectionResult};

use super::{MergeMode, MergeTarget};

/// Merge `sources` left to right into a new mapping.
///
/// The first occurrence of a key is stored as-is; later occurrences are
/// resolved by `mode`. Every distinct key appears exactly once in the
/// result.
///
/// # Errors
///
/// Returns [`CollectionError::DuplicateKey`] on the first collision when
/// `mode` is [`MergeMode::Error`]. The partially merged mapping is
/// discarded.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use collection_kit::{MergeMode, combine};
///
/// let left = BTreeMap::from([("a", 1), ("b", 2)]);
/// let right = BTreeMap::from([("b", 3), ("c", 4)]);
///
/// let merged: BTreeMap<_, _> = combine([left.clone(), right.clone()], &MergeMode::KeepRight)?;
/// assert_eq!(merged, BTreeMap::from([("a", 1), ("b", 3), ("c", 4)]));
///
/// let summed: BTreeMap<_, _> = combine([left, right], &MergeMode::custom(|_, x, y| x + y))?;
/// assert_eq!(summed.get("b"), Some(&5));
/// # Ok::<_, collection_kit::CollectionError>(())
/// ```
pub fn combine<M, K, V, I, S>(sources: I, mode: &MergeMode<'_, K, V>) -> CollectionResult<M>
where
    M: MergeTarget<K, V>,
    K: fmt::Debug,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = (K, V)>,
{
    let mut merged = M::default();
    let mut source_count = 0_usize;
    let mut collisions = 0_usize;
    for (index, source) in sources.into_iter().enumerate() {
        collisions += merge_source(&mut merged, source, mode, index)?;
        source_count = index + 1;
    }
    debug!(
        sources = source_count,
        keys = merged.key_count(),
        collisions,
        %mode,
        "combined mappings"
    );
    Ok(merged)
}

/// Merge a single `source` into an existing `accumulator`.
///
/// Under [`MergeMode::Error`] every incoming key is checked before the
/// accumulator is touched, so a failed append leaves it unchanged.
///
/// # Errors
///
/// Returns [`CollectionError::DuplicateKey`] when `mode` is
/// [`MergeMode::Error`] and `source` repeats a key already present in the
/// accumulator or within itself.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use collection_kit::{MergeMode, append};
///
/// let mut acc = HashMap::from([("retries", 3)]);
/// append(&mut acc, [("retries", 5), ("timeout", 30)], &MergeMode::KeepLeft)?;
/// assert_eq!(acc["retries"], 3);
/// assert_eq!(acc["timeout"], 30);
///
/// let clash = append(&mut acc, [("timeout", 1)], &MergeMode::Error);
/// assert!(clash.is_err());
/// assert_eq!(acc["timeout"], 30);
/// # Ok::<_, collection_kit::CollectionError>(())
/// ```
pub fn append<M, K, V, S>(
    accumulator: &mut M,
    source: S,
    mode: &MergeMode<'_, K, V>,
) -> CollectionResult<()>
where
    M: MergeTarget<K, V>,
    K: fmt::Debug,
    S: IntoIterator<Item = (K, V)>,
{
    let collisions = merge_source(accumulator, source, mode, 0)?;
    trace!(collisions, %mode, "appended mapping");
    Ok(())
}

/// Merge one source, returning the number of resolved collisions.
fn merge_source<M, K, V, S>(
    target: &mut M,
    source: S,
    mode: &MergeMode<'_, K, V>,
    source_index: usize,
) -> CollectionResult<usize>
where
    M: MergeTarget<K, V>,
    K: fmt::Debug,
    S: IntoIterator<Item = (K, V)>,
{
    let collisions = match mode {
        MergeMode::Error => return merge_strict(target, source, source_index).map(|()| 0),
        MergeMode::KeepRight => merge_resolving(target, source, source_index, |_, _, new| new),
        MergeMode::KeepLeft => merge_resolving(target, source, source_index, |_, old, _| old),
        MergeMode::Custom(resolve) => merge_resolving(target, source, source_index, resolve),
    };
    Ok(collisions)
}

fn merge_resolving<M, K, V, S, F>(
    target: &mut M,
    source: S,
    source_index: usize,
    resolve: F,
) -> usize
where
    M: MergeTarget<K, V>,
    S: IntoIterator<Item = (K, V)>,
    F: Fn(&K, V, V) -> V,
{
    let mut collisions = 0;
    for (key, incoming) in source {
        let stored = match target.take(&key) {
            Some(existing) => {
                collisions += 1;
                trace!(source_index, "resolving key collision");
                resolve(&key, existing, incoming)
            }
            None => incoming,
        };
        target.put(key, stored);
    }
    collisions
}

fn merge_strict<M, K, V, S>(target: &mut M, source: S, source_index: usize) -> CollectionResult<()>
where
    M: MergeTarget<K, V>,
    K: fmt::Debug,
    S: IntoIterator<Item = (K, V)>,
{
    let mut staged = M::default();
    for (key, value) in source {
        if target.contains_key(&key) || staged.contains_key(&key) {
            let err = CollectionError::duplicate_key(&key, source_index);
            warn!(error = %err, "merge aborted on duplicate key");
            return Err(err);
        }
        staged.put(key, value);
    }
    for (key, value) in staged {
        target.put(key, value);
    }
    Ok(())
}
