//! Mapping types that can receive merged entries.

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use serde_json::{Map, Value};

/// A key/value container that [`crate::combine`] can fold sources into.
///
/// Implementations exist for [`HashMap`] (with any hasher), [`BTreeMap`]
/// and [`serde_json::Map`].
pub trait MergeTarget<K, V>: Default + IntoIterator<Item = (K, V)> {
    /// Whether `key` is already stored.
    fn contains_key(&self, key: &K) -> bool;

    /// Remove and return the value stored under `key`.
    fn take(&mut self, key: &K) -> Option<V>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: K, value: V);

    /// Number of stored keys.
    fn key_count(&self) -> usize;
}

impl<K, V, S> MergeTarget<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    fn take(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

impl<K: Ord, V> MergeTarget<K, V> for BTreeMap<K, V> {
    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    fn take(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

impl MergeTarget<String, Value> for Map<String, Value> {
    fn contains_key(&self, key: &String) -> bool {
        Self::contains_key(self, key.as_str())
    }

    fn take(&mut self, key: &String) -> Option<Value> {
        self.remove(key.as_str())
    }

    fn put(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}
