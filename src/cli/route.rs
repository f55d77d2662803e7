//! CLI route: run context and the single run flow. Dispatches to the
//! generation pipeline and to presentation.

use crate::cli::output;
use crate::cli::parse::{parse_args, Cli};
use crate::config::{self, ConfigLoader, Configuration, RunInput, ToolSettings};
use crate::error::{ConfigError, ExitStatus, ManifestError};
use crate::generation::{GenerationReport, ManifestGenerator};
use crate::manifest::{OutputStyle, RenderedManifests};
use crate::tree::walker::WalkerConfig;
use clap::error::ErrorKind;
use std::ffi::OsString;
use tracing::{error, info, warn};

/// What a run prints and how the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    fn new(status: ExitStatus, stdout: String) -> Self {
        Self {
            status,
            stdout,
            stderr: String::new(),
        }
    }

    /// Print both streams.
    pub fn print(&self) {
        if !self.stdout.is_empty() {
            println!("{}", self.stdout);
        }
        if !self.stderr.is_empty() {
            eprintln!("{}", self.stderr);
        }
    }
}

/// Runtime context for one generation: validated configuration and the
/// resolved output style.
#[derive(Debug)]
pub struct RunContext {
    config: Configuration,
    style: OutputStyle,
    walker_config: WalkerConfig,
    quiet: bool,
}

impl RunContext {
    /// Validate the parsed arguments against the loaded settings.
    pub fn new(cli: &Cli, settings: &ToolSettings) -> Result<Self, ConfigError> {
        let input = RunInput {
            url: cli.url.clone(),
            version: cli.version.clone(),
            engine_version: cli.engine_version.clone(),
            output_dir: cli.output.clone(),
        };
        let config = Configuration::resolve(&input, settings)?;

        // Resolved once here; nothing downstream looks at the build type.
        let style = cli
            .pretty_override()
            .or(settings.pretty)
            .map(OutputStyle::from_pretty)
            .unwrap_or_else(OutputStyle::for_build);

        Ok(Self {
            config,
            style,
            walker_config: WalkerConfig {
                follow_symlinks: cli.follow_symlinks || settings.follow_symlinks,
            },
            quiet: cli.quiet,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }

    pub fn execute(&self) -> Result<GenerationReport, ManifestError> {
        ManifestGenerator::new(&self.config, self.style)
            .with_walker_config(self.walker_config.clone())
            .generate()
    }
}

/// Load settings from `--config`, or from the output directory.
pub fn load_settings(cli: &Cli) -> Result<ToolSettings, ConfigError> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&config::settings_search_dir(cli.output.as_deref())),
    }
}

/// Outcome for arguments clap rejected or a help request.
pub fn parse_error_outcome(args: &[String], err: &clap::Error) -> Outcome {
    let status = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            ExitStatus::ShowHelp
        }
        _ => ExitStatus::IncorrectArgs,
    };

    let mut stdout = output::format_banner(args, true);
    let mut outcome = Outcome::new(status, String::new());
    if let Some(line) = output::format_status(status) {
        stdout.push('\n');
        stdout.push_str(line);
        outcome.stderr = err.render().to_string();
    }
    outcome.stdout = stdout;
    outcome
}

/// Outcome for a configuration that failed validation.
pub fn config_error_outcome(args: &[String], err: &ConfigError) -> Outcome {
    Outcome::new(
        ExitStatus::from(err),
        format!("{}\n{}", output::format_banner(args, true), err),
    )
}

/// Validate, generate and render the outcome of an already parsed invocation.
pub fn run_parsed(args: &[String], cli: &Cli, settings: &ToolSettings) -> Outcome {
    let context = match RunContext::new(cli, settings) {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("Invalid configuration: {}", e);
            return config_error_outcome(args, &e);
        }
    };
    info!(config = ?context.config(), style = ?context.style(), "Run context initialized");

    let mut sections = vec![output::format_banner(args, false)];
    let status = match context.execute() {
        Ok(report) => {
            if !context.quiet {
                if let Some(echo) = pretty_echo(&context, &report) {
                    sections.push(echo);
                }
            }
            ExitStatus::Ok
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            sections.push(output::map_error(&e));
            return Outcome::new(ExitStatus::from(&e), sections.join("\n"));
        }
    };

    if let Some(line) = output::format_status(status) {
        sections.push(line.to_string());
    }
    Outcome::new(status, sections.join("\n"))
}

fn pretty_echo(context: &RunContext, report: &GenerationReport) -> Option<String> {
    if context.style() == OutputStyle::Pretty {
        return Some(output::format_manifest_echo(&report.written));
    }
    match RenderedManifests::render(&report.manifests, OutputStyle::Pretty) {
        Ok(pretty) => Some(output::format_manifest_echo(&pretty)),
        Err(e) => {
            warn!("Manifest echo skipped: {}", e);
            None
        }
    }
}

/// Full run without logging setup: parse, load settings, generate.
pub fn run<I, T>(args: I) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let echo: Vec<String> = raw.iter().map(|a| a.to_string_lossy().into_owned()).collect();

    let cli = match parse_args(raw) {
        Ok(cli) => cli,
        Err(e) => return parse_error_outcome(&echo, &e),
    };
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => return config_error_outcome(&echo, &e),
    };
    run_parsed(&echo, &cli, &settings)
}
