//! Keyed fixtures for merge tests.

use std::collections::BTreeMap;

/// Builds an ordered map from `pairs`; later pairs overwrite earlier ones.
#[must_use]
pub fn mapping<V: Clone>(pairs: &[(&'static str, V)]) -> BTreeMap<&'static str, V> {
    pairs.iter().cloned().collect()
}

/// Returns `count` single-key maps `{"k0": 0}`, `{"k1": 1}`, ... with
/// owned keys, convenient for exercising long merge chains.
#[must_use]
pub fn disjoint_sources(count: usize) -> Vec<BTreeMap<String, usize>> {
    (0..count)
        .map(|index| BTreeMap::from([(format!("k{index}"), index)]))
        .collect()
}
