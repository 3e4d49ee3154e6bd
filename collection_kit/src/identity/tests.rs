//! Unit tests for sequence identity checks.

use rstest::rstest;

use super::{IdentityOptions, distinct, is_identical, is_identical_by, is_identical_ignore_case};

const ORDERED: IdentityOptions = IdentityOptions::ordered();
const UNORDERED: IdentityOptions = IdentityOptions::unordered();

#[rstest]
#[case(vec![1, 2, 3], vec![3, 2, 1], UNORDERED, true)]
#[case(vec![1, 2, 3], vec![3, 2, 1], ORDERED, false)]
#[case(vec![1, 2, 3], vec![1, 2, 3], ORDERED, true)]
#[case(vec![1, 2], vec![1, 2, 2], UNORDERED, false)]
#[case(vec![1, 2], vec![1, 2, 2], UNORDERED.with_distinct_only(), true)]
#[case(vec![1, 1, 2], vec![1, 2, 2], UNORDERED, true)]
#[case(vec![1, 2, 1], vec![1, 2], ORDERED.with_distinct_only(), true)]
#[case(vec![2, 1, 2], vec![1, 2], ORDERED.with_distinct_only(), false)]
#[case(vec![1, 4], vec![1, 2], UNORDERED, false)]
fn compares_sequences(
    #[case] a: Vec<i32>,
    #[case] b: Vec<i32>,
    #[case] options: IdentityOptions,
    #[case] expected: bool,
) {
    assert_eq!(is_identical(&a, &b, options), expected);
}

#[test]
fn missing_and_empty_are_identical() {
    let missing: Option<Vec<i32>> = None;
    assert!(is_identical(&missing, &Vec::<i32>::new(), ORDERED));
    assert!(is_identical(&missing, &missing, UNORDERED));
    assert!(!is_identical(&missing, &Some(vec![1]), UNORDERED));
}

#[test]
fn length_mismatch_skips_comparer() {
    let calls = std::cell::Cell::new(0_u32);
    let counted = |x: &i32, y: &i32| {
        calls.set(calls.get() + 1);
        x == y
    };
    assert!(!is_identical_by(&[1, 2], &[1, 2, 3], UNORDERED, counted));
    assert_eq!(calls.get(), 0);
}

#[test]
fn custom_comparer_is_used_everywhere() {
    let same_parity = |x: &i32, y: &i32| x % 2 == y % 2;
    assert!(is_identical_by(&[1, 2], &[3, 4], ORDERED, same_parity));
    assert!(is_identical_by(
        &[1, 3, 2],
        &[4, 5],
        UNORDERED.with_distinct_only(),
        same_parity
    ));
}

#[rstest]
#[case(&["Alpha", "beta"], &["ALPHA", "Beta"], ORDERED, true)]
#[case(&["Alpha", "beta"], &["BETA", "alpha"], UNORDERED, true)]
#[case(&["a", "A", "b"], &["B", "a"], UNORDERED.with_distinct_only(), true)]
#[case(&["a", "b"], &["a", "c"], UNORDERED, false)]
#[case(&["ÄRGER", "ΣΊΣΥΦΟΣ"], &["ärger", "σίσυφος"], ORDERED, true)]
#[case(&["Éclair"], &["eclair"], ORDERED, false)]
fn ignores_case(
    #[case] a: &[&str],
    #[case] b: &[&str],
    #[case] options: IdentityOptions,
    #[case] expected: bool,
) {
    assert_eq!(is_identical_ignore_case(a, b, options), expected);
}

#[test]
fn distinct_keeps_first_occurrences() {
    let words = ["b", "a", "B", "a"];
    let unique = distinct(&words, |x, y| x.eq_ignore_ascii_case(y));
    assert_eq!(unique, [&"b", &"a"]);
}

#[test]
fn options_deserialise_with_defaults() {
    let options: IdentityOptions =
        serde_json::from_str(r#"{"ignore_order": true}"#).expect("partial options parse");
    assert_eq!(options, UNORDERED);
}
