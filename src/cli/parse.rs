//! CLI parse: clap types and legacy flag rewriting. No behavior beyond parsing.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Hotmanifest CLI - hot-update manifest generator
#[derive(Parser, Debug)]
#[command(name = "hotmanifest")]
#[command(about = "Generate version and project manifests for hot-update clients")]
#[command(disable_version_flag = true, arg_required_else_help = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Root URL of manifest files and resources
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Version label, preferably an integer
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Version string of the engine
    #[arg(long = "engine-version", value_name = "VERSION")]
    pub engine_version: Option<String>,

    /// Output directory; resources live in its <version> subdirectory
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Settings file (overrides <output>/hotmanifest.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write multi-line manifests
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,

    /// Write single-line manifests
    #[arg(long)]
    pub compact: bool,

    /// Follow symbolic links inside the resource directory
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Do not echo the generated manifests
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

impl Cli {
    /// Output style forced by flags, if any.
    pub fn pretty_override(&self) -> Option<bool> {
        if self.pretty {
            Some(true)
        } else if self.compact {
            Some(false)
        } else {
            None
        }
    }
}

/// Flags whose next argument is their value, in both spellings.
const VALUE_FLAGS: &[&str] = &[
    "-u",
    "--url",
    "-v",
    "--version",
    "--engine-version",
    "-o",
    "--output",
    "--config",
    "--log-level",
    "--log-format",
];

/// Rewrite the single-dash long flags accepted by older tooling.
///
/// Only tokens in flag position are rewritten; the value following a
/// value-taking flag is passed through untouched. The first argument
/// (program name) is left alone.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut expects_value = false;
    args.into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            let arg = arg.into();
            if idx == 0 {
                return arg;
            }
            if expects_value {
                expects_value = false;
                return arg;
            }
            let replacement = match arg.to_str() {
                Some("-url") => "--url",
                Some("-version") => "--version",
                Some("-engineversion") | Some("-ev") => "--engine-version",
                Some("/?") => "--help",
                _ => {
                    expects_value = arg.to_str().is_some_and(|a| VALUE_FLAGS.contains(&a));
                    return arg;
                }
            };
            expects_value = VALUE_FLAGS.contains(&replacement);
            OsString::from(replacement)
        })
        .collect()
}

/// Parse command-line arguments, accepting legacy flag spellings.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_legacy_args(args))
}
