//! CLI output: banner, argument echo, manifest echo and status messages.

use crate::cli::help;
use crate::error::{ExitStatus, ManifestError};
use crate::manifest::RenderedManifests;
use crate::types::{PROJECT_MANIFEST_FILENAME, VERSION_MANIFEST_FILENAME};

const SECTION_RULE: &str = "============";

/// Banner printed before anything else, with usage when `show_help` is set.
///
/// `args` includes the program name, which is not echoed.
pub fn format_banner(args: &[String], show_help: bool) -> String {
    let mut lines = vec![help::gap_line().to_string(), help::version_line()];

    if show_help {
        lines.push(help::usage_text());
    }

    if args.len() > 1 {
        lines.push("* ============".to_string());
        lines.push("* Arguments:".to_string());
        lines.push("* ----------".to_string());
        for (idx, arg) in args.iter().enumerate().skip(1) {
            lines.push(format!("* {} : {}", idx, arg));
        }
    }

    lines.push(help::gap_line().to_string());
    lines.join("\n")
}

/// Both manifests under their file names, each followed by a rule.
pub fn format_manifest_echo(pretty: &RenderedManifests) -> String {
    format!(
        "{}\n\n{}\n{}\n{}\n\n{}\n{}",
        VERSION_MANIFEST_FILENAME,
        pretty.version,
        SECTION_RULE,
        PROJECT_MANIFEST_FILENAME,
        pretty.project,
        SECTION_RULE
    )
}

/// Final status line for a finished run.
pub fn format_status(status: ExitStatus) -> Option<&'static str> {
    match status {
        ExitStatus::Ok => Some("Manifest files generated."),
        ExitStatus::ManifestWriteError => Some("Cannot overwrite manifest file."),
        ExitStatus::IncorrectArgs => Some("Incorrect args."),
        ExitStatus::UnknownError => Some("Unknown error."),
        _ => None,
    }
}

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ManifestError) -> String {
    match e {
        // Configuration errors already carry the user-facing wording.
        ManifestError::Config(inner) => inner.to_string(),
        other => match format_status(ExitStatus::from(other)) {
            Some(status) => format!("{}\n{}", status, other),
            None => other.to_string(),
        },
    }
}
