//! Helpers for running settings tests inside a [`figment::Jail`].
//!
//! A jail gives each test a scratch working directory and restores any
//! environment variables it sets, so tests touching `COLLECTION_KIT_*`
//! variables or settings files cannot observe each other.

use anyhow::{Result, anyhow};
use camino::Utf8Path;

/// Runs `f` inside a fresh jail and returns its output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `f` fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!("jailed test failed: {err}"))?;
    output.ok_or_else(|| anyhow!("jail closure produced no output"))
}

/// Writes `contents` to `file_name` inside a fresh jail, applies `env`, then
/// runs `f` with the path of the written file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or `f` fails.
pub fn with_settings_file<F, T>(
    file_name: &str,
    contents: &str,
    env: &[(&str, &str)],
    f: F,
) -> Result<T>
where
    F: FnOnce(&Utf8Path) -> T,
{
    with_jail(|jail| {
        jail.create_file(file_name, contents)?;
        for (key, value) in env {
            jail.set_env(key, value);
        }
        Ok(f(Utf8Path::new(file_name)))
    })
}
