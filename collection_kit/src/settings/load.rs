//! Layered loading of [`Settings`] with Figment.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use tracing::debug;

use crate::{CollectionError, CollectionResult, ResultExt};

use super::Settings;

/// Prefix for environment overrides, e.g. `COLLECTION_KIT_PAD_BOUNDARY=start`.
///
/// Nested keys are separated by a double underscore:
/// `COLLECTION_KIT_IDENTITY__IGNORE_ORDER=true`.
pub const ENV_PREFIX: &str = "COLLECTION_KIT_";

impl Settings {
    /// Build the provider stack: defaults, then the TOML file at `path` (if
    /// any), then `COLLECTION_KIT_*` environment variables.
    ///
    /// A missing file contributes nothing here; [`Settings::load`] is the
    /// strict entry point.
    #[must_use]
    pub fn figment(path: Option<&Utf8Path>) -> Figment {
        let base = Figment::from(Serialized::defaults(Self::default()));
        let with_file = match path {
            Some(file) => base.merge(Toml::file(file.as_std_path())),
            None => base,
        };
        with_file.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load settings from defaults, an optional TOML file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] when `path` names a file
    /// that does not exist, and [`CollectionError::Config`] when a layer
    /// cannot be parsed or holds an unknown policy name.
    pub fn load(path: Option<&Utf8Path>) -> CollectionResult<Self> {
        if let Some(file) = path.filter(|file| !file.is_file()) {
            return Err(CollectionError::invalid_argument(
                "path",
                format!("settings file '{file}' does not exist"),
            ));
        }
        let settings = Self::from_figment(&Self::figment(path))?;
        debug!(file = ?path, ?settings, "loaded collection settings");
        Ok(settings)
    }

    /// Extract settings from an arbitrary provider stack.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Config`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> CollectionResult<Self> {
        figment.extract().into_collection()
    }
}
