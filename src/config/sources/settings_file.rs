//! Settings file source: `hotmanifest.toml` next to the generated manifests.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::debug;

/// Settings file looked up in the output directory.
pub const SETTINGS_FILE_NAME: &str = "hotmanifest.toml";

/// Add `<dir>/hotmanifest.toml` to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let settings_path = dir.join(SETTINGS_FILE_NAME);
    if !settings_path.is_file() {
        debug!(path = %settings_path.display(), "No settings file");
        return Ok(builder);
    }
    add_file(builder, &settings_path, false)
}

/// Add an explicit settings file. A missing required file fails the build.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    debug!(path = %path.display(), required, "Adding settings file");
    Ok(builder.add_source(
        File::from(path.to_path_buf())
            .format(FileFormat::Toml)
            .required(required),
    ))
}
