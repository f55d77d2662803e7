//! CLI domain: parse, route, help and output only.
//! No pipeline logic; the route hands a validated configuration to generation.

mod help;
mod output;
mod parse;
mod route;

pub use help::usage_text;
pub use output::{format_banner, format_manifest_echo, map_error};
pub use parse::{normalize_legacy_args, parse_args, Cli};
pub use route::{
    config_error_outcome, load_settings, parse_error_outcome, run, run_parsed, Outcome,
    RunContext,
};
