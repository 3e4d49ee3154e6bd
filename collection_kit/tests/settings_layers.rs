//! Integration tests for layered settings loading.

use std::collections::BTreeMap;

use collection_kit::{Boundary, CollectionError, MergeStrategy, OverflowPolicy, Settings};
use test_helpers::figment::with_settings_file;

#[test]
fn settings_file_drives_helpers() -> anyhow::Result<()> {
    let settings = with_settings_file(
        "kit.toml",
        r#"
            pad_boundary = "start"
            crop_boundary = "start"
            overflow = "reject"
            merge = "keep_left"
        "#,
        &[],
        |path| Settings::load(Some(path)),
    )??;

    assert_eq!(settings.pad_boundary, Boundary::Start);
    assert_eq!(settings.overflow, OverflowPolicy::Reject);
    assert_eq!(settings.fit(["b", "c"], 3, "a"), ["a", "b", "c"]);
    assert_eq!(settings.crop(["a", "b", "c"], 1), ["c"]);
    let merged: BTreeMap<&str, u8> = settings.combine([[("k", 1)], [("k", 2)]])?;
    assert_eq!(merged.get("k"), Some(&1));
    Ok(())
}

#[test]
fn environment_wins_over_file() -> anyhow::Result<()> {
    let settings = with_settings_file(
        "kit.toml",
        "merge = \"keep_left\"\noverflow = \"reject\"",
        &[
            ("COLLECTION_KIT_MERGE", "error"),
            ("COLLECTION_KIT_OVERFLOW", "keep"),
        ],
        |path| Settings::load(Some(path)),
    )??;

    assert_eq!(settings.merge, MergeStrategy::Error);
    assert_eq!(settings.overflow, OverflowPolicy::Keep);
    let clash = settings.combine::<BTreeMap<_, _>, _, _, _, _>([[("k", 1)], [("k", 2)]]);
    assert!(matches!(clash, Err(CollectionError::DuplicateKey { .. })));
    Ok(())
}

#[test]
fn unknown_policy_name_is_reported() -> anyhow::Result<()> {
    let outcome = with_settings_file(
        "kit.toml",
        "pad_boundary = \"middle\"",
        &[],
        |path| Settings::load(Some(path)),
    )?;
    let err = outcome.expect_err("middle is not a boundary");
    assert!(matches!(err, CollectionError::Config(_)));
    assert!(err.to_string().contains("failed to load collection settings"));
    Ok(())
}
