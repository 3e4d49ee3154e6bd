//! Recursive merging of JSON documents.

use serde_json::Value;

use crate::{CollectionError, CollectionResult};

use super::MergeStrategy;

/// Key reported for a conflict between two non-object documents.
pub const ROOT_PATH: &str = "<root>";

/// Overlay `layer` onto `target` using `strategy` for conflicting leaves.
///
/// Objects on both sides merge key by key, recursively. Any other pairing
/// (scalar over scalar, array over object, ...) is a collision resolved by
/// `strategy`. A `null` target counts as absent and is simply replaced.
/// Under [`MergeStrategy::Error`] the reported key is the dotted path to the
/// conflict, or [`ROOT_PATH`] when the documents clash at the top level, and
/// `target` is left unchanged.
///
/// # Errors
///
/// Returns [`CollectionError::DuplicateKey`] for a collision under
/// [`MergeStrategy::Error`].
///
/// # Examples
///
/// ```
/// use collection_kit::{MergeStrategy, merge_json};
/// use serde_json::json;
///
/// let mut doc = json!({"db": {"host": "localhost", "port": 5432}});
/// merge_json(&mut doc, json!({"db": {"port": 6543}, "debug": true}), MergeStrategy::KeepRight)?;
/// assert_eq!(doc, json!({"db": {"host": "localhost", "port": 6543}, "debug": true}));
///
/// let clash = merge_json(&mut doc, json!({"db": {"port": 1}}), MergeStrategy::Error);
/// assert!(clash.is_err());
/// assert_eq!(doc["db"]["port"], 6543);
/// # Ok::<_, collection_kit::CollectionError>(())
/// ```
pub fn merge_json(
    target: &mut Value,
    layer: Value,
    strategy: MergeStrategy,
) -> CollectionResult<()> {
    if strategy == MergeStrategy::Error {
        let mut staged = target.clone();
        overlay(&mut staged, layer, strategy, &mut Vec::new())?;
        *target = staged;
        return Ok(());
    }
    overlay(target, layer, strategy, &mut Vec::new())
}

/// Merge a sequence of JSON documents left to right.
///
/// Returns [`Value::Null`] when `layers` is empty.
///
/// # Errors
///
/// Returns [`CollectionError::DuplicateKey`] naming the offending layer when
/// `strategy` is [`MergeStrategy::Error`] and two layers set the same leaf.
pub fn combine_json<I>(layers: I, strategy: MergeStrategy) -> CollectionResult<Value>
where
    I: IntoIterator<Item = Value>,
{
    let mut merged = Value::Null;
    for (index, layer) in layers.into_iter().enumerate() {
        overlay(&mut merged, layer, strategy, &mut Vec::new()).map_err(|err| match err {
            CollectionError::DuplicateKey { key, .. } => CollectionError::DuplicateKey {
                key,
                source_index: index,
            },
            other => other,
        })?;
    }
    Ok(merged)
}

fn overlay(
    target: &mut Value,
    layer: Value,
    strategy: MergeStrategy,
    path: &mut Vec<String>,
) -> CollectionResult<()> {
    if target.is_null() {
        *target = layer;
        return Ok(());
    }
    let Value::Object(incoming) = layer else {
        return resolve_leaf(target, layer, strategy, path);
    };
    let Value::Object(existing) = target else {
        return resolve_leaf(target, Value::Object(incoming), strategy, path);
    };
    for (key, value) in incoming {
        match existing.get_mut(&key) {
            Some(slot) => {
                path.push(key);
                overlay(slot, value, strategy, path)?;
                path.pop();
            }
            None => {
                existing.insert(key, value);
            }
        }
    }
    Ok(())
}

fn resolve_leaf(
    target: &mut Value,
    incoming: Value,
    strategy: MergeStrategy,
    path: &[String],
) -> CollectionResult<()> {
    match strategy {
        MergeStrategy::KeepRight => *target = incoming,
        MergeStrategy::KeepLeft => {}
        MergeStrategy::Error => {
            let key = if path.is_empty() {
                ROOT_PATH.to_owned()
            } else {
                path.join(".")
            };
            return Err(CollectionError::duplicate_key(key.as_str(), 0));
        }
    }
    Ok(())
}
