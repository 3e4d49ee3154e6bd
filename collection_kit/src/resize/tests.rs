//! Unit tests for pad, crop and fit.

use rstest::rstest;

use super::{checked_target, crop, crop_in_place, fit, fit_in_place, pad, pad_in_place};
use crate::{Boundary, CollectionError, OverflowPolicy};

#[rstest]
#[case(vec![1, 2], 5, Boundary::End, vec![1, 2, 0, 0, 0])]
#[case(vec![1, 2], 4, Boundary::Start, vec![0, 0, 1, 2])]
#[case(vec![1, 2], 2, Boundary::Start, vec![1, 2])]
#[case(vec![], 2, Boundary::End, vec![0, 0])]
fn pads_at_boundary(
    #[case] items: Vec<i32>,
    #[case] target: usize,
    #[case] boundary: Boundary,
    #[case] expected: Vec<i32>,
) -> anyhow::Result<()> {
    let padded = pad(items, target, boundary, 0, OverflowPolicy::Keep)?;
    assert_eq!(padded, expected);
    Ok(())
}

#[test]
fn pads_empty_sequence_with_strings() -> anyhow::Result<()> {
    let fill = "x".to_owned();
    let padded = pad(Vec::new(), 3, Boundary::Start, fill, OverflowPolicy::Keep)?;
    assert_eq!(padded, ["x", "x", "x"]);
    Ok(())
}

#[test]
fn keep_policy_leaves_long_sequences_alone() -> anyhow::Result<()> {
    let padded = pad([1, 2, 3], 1, Boundary::End, 9, OverflowPolicy::Keep)?;
    assert_eq!(padded, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn reject_policy_fails_without_mutation() {
    let mut items = vec![1, 2, 3];
    let err = pad_in_place(&mut items, 2, Boundary::End, 0, OverflowPolicy::Reject)
        .expect_err("sequence already exceeds the target");
    assert!(matches!(
        err,
        CollectionError::InvalidArgument { argument: "items", .. }
    ));
    assert!(err.to_string().contains("already exceeds target size 2"));
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn reject_policy_allows_exact_length() {
    let mut items = vec![1, 2];
    pad_in_place(&mut items, 2, Boundary::Start, 0, OverflowPolicy::Reject)
        .expect("equal length is not an overflow");
    assert_eq!(items, vec![1, 2]);
}

#[rstest]
#[case(Boundary::Start, vec![4, 5])]
#[case(Boundary::End, vec![1, 2])]
fn crops_from_boundary(#[case] boundary: Boundary, #[case] expected: Vec<i32>) {
    assert_eq!(crop([1, 2, 3, 4, 5], 2, boundary), expected);
}

#[test]
fn crop_to_zero_empties() {
    let mut items = vec!['a', 'b'];
    crop_in_place(&mut items, 0, Boundary::Start);
    assert!(items.is_empty());
}

#[test]
fn crop_never_grows() {
    assert_eq!(crop([7], 3, Boundary::End), vec![7]);
}

#[rstest]
#[case(vec![1, 2, 3, 4], 2, vec![3, 4])]
#[case(vec![1, 2], 4, vec![1, 2, 0, 0])]
#[case(vec![1, 2, 3], 3, vec![1, 2, 3])]
fn fit_picks_one_operation(
    #[case] items: Vec<i32>,
    #[case] target: usize,
    #[case] expected: Vec<i32>,
) {
    let fitted = fit(items, target, Boundary::Start, Boundary::End, 0);
    assert_eq!(fitted, expected);
}

#[test]
fn fit_in_place_pads_at_start() {
    let mut items = vec!["b"];
    fit_in_place(&mut items, 3, Boundary::End, Boundary::Start, "a");
    assert_eq!(items, ["a", "a", "b"]);
}

#[rstest]
#[case(0, Some(0))]
#[case(12, Some(12))]
#[case(-1, None)]
#[case(i64::MIN, None)]
fn validates_signed_targets(#[case] requested: i64, #[case] expected: Option<usize>) {
    assert_eq!(checked_target(requested).ok(), expected);
}

#[test]
fn negative_target_names_the_argument() {
    let err = checked_target(-4).expect_err("negative target");
    assert!(matches!(
        err,
        CollectionError::InvalidArgument { argument: "target", .. }
    ));
    assert!(err.to_string().contains("-4"));
}
