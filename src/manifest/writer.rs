//! Manifest serialization and persistence

use crate::config::Configuration;
use crate::error::ManifestError;
use crate::manifest::document::ManifestSet;
use crate::types::{PROJECT_MANIFEST_FILENAME, VERSION_MANIFEST_FILENAME};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

/// Text layout of written manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Multi-line, tab indented.
    Pretty,
    /// Single line.
    Compact,
}

impl OutputStyle {
    /// Pretty for debug builds, compact for release builds.
    pub fn for_build() -> Self {
        Self::from_pretty(cfg!(debug_assertions))
    }

    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Compact
        }
    }
}

/// Serialize a document in the given style.
pub fn render<T: Serialize>(document: &T, style: OutputStyle) -> Result<String, serde_json::Error> {
    match style {
        OutputStyle::Compact => serde_json::to_string(document),
        OutputStyle::Pretty => {
            let mut buf = Vec::new();
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
            document.serialize(&mut ser)?;
            // serde_json only emits UTF-8.
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}

/// Both manifests rendered in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedManifests {
    pub version: String,
    pub project: String,
}

impl RenderedManifests {
    pub fn render(set: &ManifestSet, style: OutputStyle) -> Result<Self, ManifestError> {
        let version = render(&set.version_manifest(), style).map_err(|source| {
            ManifestError::Serialize {
                name: VERSION_MANIFEST_FILENAME,
                source,
            }
        })?;
        let project = render(&set.project_manifest(), style).map_err(|source| {
            ManifestError::Serialize {
                name: PROJECT_MANIFEST_FILENAME,
                source,
            }
        })?;
        Ok(Self { version, project })
    }
}

/// Target locations of the three manifest files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    /// `<output>/<version>/project.manifest`
    pub project: PathBuf,
    /// `<output>/project.manifest`, kept for older clients.
    pub legacy_project: PathBuf,
    /// `<output>/version.manifest`
    pub version: PathBuf,
}

impl ManifestPaths {
    pub fn for_config(config: &Configuration) -> Self {
        Self {
            project: config.resource_dir.join(PROJECT_MANIFEST_FILENAME),
            legacy_project: config.output_dir.join(PROJECT_MANIFEST_FILENAME),
            version: config.output_dir.join(VERSION_MANIFEST_FILENAME),
        }
    }
}

/// Writes rendered manifests to disk, overwriting existing files.
pub struct ManifestWriter {
    paths: ManifestPaths,
    style: OutputStyle,
}

impl ManifestWriter {
    pub fn new(paths: ManifestPaths, style: OutputStyle) -> Self {
        Self { paths, style }
    }

    /// Write the project manifest twice and the version manifest once.
    ///
    /// Stops at the first failure. Files written before it are left in place.
    #[instrument(skip(self, set), fields(style = ?self.style))]
    pub fn write(&self, set: &ManifestSet) -> Result<RenderedManifests, ManifestError> {
        let rendered = RenderedManifests::render(set, self.style)?;

        write_file(&self.paths.project, &rendered.project)?;
        write_file(&self.paths.legacy_project, &rendered.project)?;
        write_file(&self.paths.version, &rendered.version)?;

        info!("Manifest files written");
        Ok(rendered)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ManifestError> {
    fs::write(path, contents).map_err(|source| {
        error!(path = %path.display(), error = %source, "Manifest write failed");
        ManifestError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote manifest");
    Ok(())
}
