//! Settings loader: merges defaults, settings file and environment.

use super::merge;
use super::sources::{environment, settings_file};
use super::ToolSettings;
use crate::error::ConfigError;
use std::path::Path;
use tracing::debug;

/// Loads [`ToolSettings`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings, reading `hotmanifest.toml` from `search_dir` if present.
    pub fn load(search_dir: &Path) -> Result<ToolSettings, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = settings_file::add_to_builder(builder, search_dir)?;
        Self::finish(environment::add_to_builder(builder))
    }

    /// Load settings from an explicit file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<ToolSettings, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = settings_file::add_file(builder, path, true)?;
        Self::finish(environment::add_to_builder(builder))
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<ToolSettings, ConfigError> {
        let settings: ToolSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }
}
