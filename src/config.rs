//! Configuration System
//!
//! Two layers: [`ToolSettings`] are loaded from defaults, an optional
//! settings file and the environment; [`Configuration`] is the validated
//! per-run input the generation pipeline consumes.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::tree::path;
use crate::types::DEFAULT_ENGINE_VERSION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

mod loader;
mod merge;
mod sources;

pub use loader::ConfigLoader;
pub use sources::settings_file::SETTINGS_FILE_NAME;

/// Shortest base URL accepted, e.g. `http://a.b`.
const MIN_URL_LEN: usize = 10;

/// Tool-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Engine version used when none is given on the command line
    #[serde(default = "default_engine_version")]
    pub engine_version: String,

    /// Pretty-print manifests (None = decided by build type)
    #[serde(default)]
    pub pretty: Option<bool>,

    /// Follow symbolic links while walking resources
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_engine_version() -> String {
    DEFAULT_ENGINE_VERSION.to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            engine_version: default_engine_version(),
            pretty: None,
            follow_symlinks: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl ToolSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine_version.is_empty() {
            return Err(ConfigError::InvalidEngineVersion(self.engine_version.clone()));
        }
        Ok(())
    }
}

/// Raw run input as received from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunInput {
    pub url: Option<String>,
    pub version: Option<String>,
    pub engine_version: Option<String>,
    pub output_dir: Option<String>,
}

/// Validated configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Always ends with `/`
    pub base_url: String,
    pub version: String,
    pub engine_version: String,
    /// Always ends with the platform separator
    pub output_dir: PathBuf,
    /// `output_dir + version + separator`
    pub resource_dir: PathBuf,
}

impl Configuration {
    /// Validate run input, in the order URL, version, engine version,
    /// output path, resource path.
    ///
    /// Only reads the filesystem; nothing is created or written.
    pub fn resolve(input: &RunInput, settings: &ToolSettings) -> Result<Self, ConfigError> {
        let url = input.url.clone().unwrap_or_default();
        if url.len() < MIN_URL_LEN || !url.starts_with("http") {
            return Err(ConfigError::InvalidUrl(url));
        }
        let base_url = path::ensure_trailing_slash(&url);

        let version = input.version.clone().unwrap_or_default();
        if version.is_empty() {
            return Err(ConfigError::InvalidVersion(version));
        }

        let engine_version = input
            .engine_version
            .clone()
            .unwrap_or_else(|| settings.engine_version.clone());
        if engine_version.is_empty() {
            return Err(ConfigError::InvalidEngineVersion(engine_version));
        }

        let output = input.output_dir.clone().unwrap_or_default();
        let output_dir = path::ensure_trailing_separator(&output);
        if !is_readable_dir(&output_dir) {
            return Err(ConfigError::OutputPathInaccessible(output_dir));
        }

        let resource_dir = path::ensure_trailing_separator(&format!(
            "{}{}",
            output_dir.to_string_lossy(),
            version
        ));
        if !is_readable_dir(&resource_dir) {
            return Err(ConfigError::ResourcePathInaccessible(resource_dir));
        }

        Ok(Self {
            base_url,
            version,
            engine_version,
            output_dir,
            resource_dir,
        })
    }
}

fn is_readable_dir(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok()
}

/// Directory searched for a settings file when none is given explicitly.
pub fn settings_search_dir(output_dir: Option<&str>) -> PathBuf {
    match output_dir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(format!(".{}", MAIN_SEPARATOR)),
    }
}
