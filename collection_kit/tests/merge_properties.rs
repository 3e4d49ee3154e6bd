//! Property tests for mapping merges.
//!
//! 1. Disjoint sources merge to their union under every mode
//! 2. Keep-right takes the later value, keep-left the earlier one
//! 3. Every key appears exactly once

use std::collections::{BTreeMap, BTreeSet, HashMap};

use collection_kit::{MergeMode, combine};
use proptest::prelude::*;
use test_helpers::mappings::disjoint_sources;

fn small_map() -> impl Strategy<Value = BTreeMap<u8, i32>> {
    prop::collection::btree_map(0u8..32, any::<i32>(), 0..16)
}

fn every_mode() -> Vec<MergeMode<'static, u8, i32>> {
    vec![
        MergeMode::KeepRight,
        MergeMode::KeepLeft,
        MergeMode::Error,
        MergeMode::custom(|_, left: i32, right: i32| left.wrapping_add(right)),
    ]
}

proptest! {
    #[test]
    fn disjoint_sources_union_under_any_mode(left in small_map(), right in small_map()) {
        let disjoint: BTreeMap<u8, i32> = right
            .into_iter()
            .filter(|(key, _)| !left.contains_key(key))
            .collect();
        let mut union = left.clone();
        union.extend(disjoint.clone());
        for mode in every_mode() {
            let merged: BTreeMap<u8, i32> = combine([left.clone(), disjoint.clone()], &mode)
                .expect("disjoint keys never collide");
            prop_assert_eq!(&merged, &union);
        }
    }

    #[test]
    fn keep_right_and_keep_left_are_symmetric(left in small_map(), right in small_map()) {
        let newest: HashMap<u8, i32> =
            combine([left.clone(), right.clone()], &MergeMode::KeepRight).expect("keep-right");
        let oldest: HashMap<u8, i32> =
            combine([left.clone(), right.clone()], &MergeMode::KeepLeft).expect("keep-left");
        for key in left.keys().filter(|key| right.contains_key(*key)) {
            prop_assert_eq!(newest.get(key), right.get(key));
            prop_assert_eq!(oldest.get(key), left.get(key));
        }
        let keys: BTreeSet<u8> = left.keys().chain(right.keys()).copied().collect();
        prop_assert_eq!(newest.len(), keys.len());
        prop_assert_eq!(oldest.len(), keys.len());
    }
}

#[test]
fn long_disjoint_chains_merge_strictly() {
    let merged: BTreeMap<String, usize> =
        combine(disjoint_sources(50), &MergeMode::Error).expect("all keys unique");
    assert_eq!(merged.len(), 50);
    assert_eq!(merged.get("k49"), Some(&49));
}
