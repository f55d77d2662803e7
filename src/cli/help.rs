//! CLI help: banner and usage text in the flag spelling users know.

use crate::types::{TOOL_NAME, TOOL_VERSION};

const GAP_LINE: &str = "************************************";

/// Usage rows: flag column and description.
const USAGE_ROWS: &[(&str, &str)] = &[
    ("--help", "Help (this text)."),
    ("-h", "Same as '--help'."),
    ("/?", "Same as '--help'."),
    ("-url URL", "Root path of manifest files and resources. Must end with '/'."),
    ("-u URL", "Same as '-url'."),
    ("-version version", "Version number, better using an integer."),
    ("-v version", "Same as '-version'."),
    ("-engineversion version", "Version string of the engine."),
    ("-ev version", "Same as '-engineversion'."),
    (
        "-o path",
        "Output directory of manifest files. Resources should be placed in the subdirectory named of version.",
    ),
    ("--config FILE", "Settings file. Defaults to <output>/hotmanifest.toml."),
    ("--pretty", "Write multi-line manifests."),
    ("--compact", "Write single-line manifests."),
    ("--follow-symlinks", "Follow symbolic links inside the resource directory."),
    ("-q, --quiet", "Do not echo the generated manifests."),
];

/// Line of asterisks framing the banner.
pub fn gap_line() -> &'static str {
    GAP_LINE
}

/// `* hotmanifest  Ver. x.y.z`
pub fn version_line() -> String {
    format!("* {}  Ver. {}", TOOL_NAME, TOOL_VERSION)
}

/// Usage block, one `*`-prefixed line per row.
pub fn usage_text() -> String {
    let width = USAGE_ROWS.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);

    let mut lines = vec![
        "* ============".to_string(),
        "* Usage:".to_string(),
        "* ------".to_string(),
        format!("* {} <options>", TOOL_NAME),
    ];
    for (flag, description) in USAGE_ROWS {
        lines.push(format!("*   {:<width$}  {}", flag, description, width = width));
    }
    lines.join("\n")
}
