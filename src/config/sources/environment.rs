//! Environment source: `HOTMANIFEST_*` variables, `__` between nested keys.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Prefix of environment variables read as settings.
pub const ENV_PREFIX: &str = "HOTMANIFEST";

/// Add environment overrides, e.g. `HOTMANIFEST_LOGGING__LEVEL=debug`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    )
}
