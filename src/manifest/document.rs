//! Manifest documents and their assembly
//!
//! Both documents borrow one [`ManifestHeader`], so the shared fields
//! cannot drift between them within a run.

use crate::config::Configuration;
use crate::manifest::index::AssetIndex;
use crate::types::{PROJECT_MANIFEST_FILENAME, TOOL_NAME, TOOL_VERSION, VERSION_MANIFEST_FILENAME};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Timestamp layout of `creationTime`.
pub const CREATION_TIME_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Fields shared by the version and project manifests, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestHeader {
    pub creator: String,
    pub creation_time: String,
    pub package_url: String,
    pub remote_manifest_url: String,
    pub remote_version_url: String,
    pub version: String,
    pub engine_version: String,
}

/// Contents of `version.manifest`.
#[derive(Debug, Serialize)]
pub struct VersionManifest<'a> {
    #[serde(flatten)]
    pub header: &'a ManifestHeader,
}

/// Contents of `project.manifest`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest<'a> {
    #[serde(flatten)]
    pub header: &'a ManifestHeader,
    pub assets: &'a AssetIndex,
    /// Reserved; always empty.
    pub search_paths: Vec<String>,
}

/// Everything a run produces before it is written out.
#[derive(Debug, Clone)]
pub struct ManifestSet {
    header: ManifestHeader,
    assets: AssetIndex,
}

impl ManifestSet {
    pub fn header(&self) -> &ManifestHeader {
        &self.header
    }

    pub fn assets(&self) -> &AssetIndex {
        &self.assets
    }

    pub fn version_manifest(&self) -> VersionManifest<'_> {
        VersionManifest {
            header: &self.header,
        }
    }

    pub fn project_manifest(&self) -> ProjectManifest<'_> {
        ProjectManifest {
            header: &self.header,
            assets: &self.assets,
            search_paths: Vec::new(),
        }
    }
}

/// Display name of the host platform used in `creator`.
pub fn platform_name() -> &'static str {
    match std::env::consts::OS {
        "windows" => "Windows",
        "macos" => "OS X",
        "linux" => "Linux",
        "ios" => "iOS",
        "android" => "Android",
        other => other,
    }
}

/// Builds the manifest documents for one configuration.
pub struct ManifestAssembler<'a> {
    config: &'a Configuration,
}

impl<'a> ManifestAssembler<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Assemble using the current local wall-clock time.
    pub fn assemble(&self, assets: AssetIndex) -> ManifestSet {
        self.assemble_at(assets, Local::now())
    }

    /// Assemble with a fixed creation time.
    pub fn assemble_at(&self, assets: AssetIndex, created: DateTime<Local>) -> ManifestSet {
        ManifestSet {
            header: self.header_at(created),
            assets,
        }
    }

    fn header_at(&self, created: DateTime<Local>) -> ManifestHeader {
        let base_url = &self.config.base_url;
        let version = &self.config.version;
        let package_url = format!("{}{}/", base_url, version);

        ManifestHeader {
            creator: format!("{} for {} Ver. {}", TOOL_NAME, platform_name(), TOOL_VERSION),
            creation_time: created.format(CREATION_TIME_FORMAT).to_string(),
            remote_manifest_url: format!("{}{}", package_url, PROJECT_MANIFEST_FILENAME),
            package_url,
            remote_version_url: format!("{}{}", base_url, VERSION_MANIFEST_FILENAME),
            version: version.clone(),
            engine_version: self.config.engine_version.clone(),
        }
    }
}
