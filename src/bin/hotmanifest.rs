//! Hotmanifest CLI Binary
//!
//! Command-line interface for generating hot-update manifests.

use hotmanifest::cli::{self, Cli};
use hotmanifest::config::ToolSettings;
use hotmanifest::error::ExitStatus;
use hotmanifest::logging::{init_logging, LoggingConfig};
use std::ffi::OsString;
use std::process;
use tracing::info;

fn main() {
    let raw: Vec<OsString> = std::env::args_os().collect();
    let args: Vec<String> = raw.iter().map(|a| a.to_string_lossy().into_owned()).collect();

    let outcome = match cli::parse_args(raw) {
        Err(e) => cli::parse_error_outcome(&args, &e),
        Ok(cli) => match cli::load_settings(&cli) {
            Err(e) => cli::config_error_outcome(&args, &e),
            Ok(settings) => {
                // Initialize logging before the pipeline runs
                let logging_config = build_logging_config(&cli, &settings);
                if let Err(e) = init_logging(Some(&logging_config)) {
                    eprintln!("Failed to initialize logging: {}", e);
                    process::exit(ExitStatus::UnknownError.code());
                }
                info!("Hotmanifest starting");
                cli::run_parsed(&args, &cli, &settings)
            }
        },
    };

    outcome.print();
    process::exit(outcome.status.code());
}

/// Build logging configuration from settings and CLI flags.
/// Precedence: CLI flags override settings override defaults.
fn build_logging_config(cli: &Cli, settings: &ToolSettings) -> LoggingConfig {
    let mut config = settings.logging.clone();
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
