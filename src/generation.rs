//! Manifest generation pipeline
//!
//! Walk and hash the resource directory, assemble both documents from one
//! header, then write the three manifest files. Strictly sequential.

use crate::config::Configuration;
use crate::error::ManifestError;
use crate::manifest::{
    AssetIndexBuilder, ManifestAssembler, ManifestPaths, ManifestSet, ManifestWriter,
    OutputStyle, RenderedManifests,
};
use crate::tree::walker::WalkerConfig;
use crate::types::PROJECT_MANIFEST_FILENAME;
use std::time::Instant;
use tracing::{info, instrument};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub manifests: ManifestSet,
    /// Text exactly as written to disk.
    pub written: RenderedManifests,
    pub paths: ManifestPaths,
}

/// Drives one generation run for a validated configuration.
pub struct ManifestGenerator<'a> {
    config: &'a Configuration,
    walker_config: WalkerConfig,
    style: OutputStyle,
}

impl<'a> ManifestGenerator<'a> {
    pub fn new(config: &'a Configuration, style: OutputStyle) -> Self {
        Self {
            config,
            walker_config: WalkerConfig::default(),
            style,
        }
    }

    pub fn with_walker_config(mut self, walker_config: WalkerConfig) -> Self {
        self.walker_config = walker_config;
        self
    }

    #[instrument(skip(self), fields(version = %self.config.version, resources = %self.config.resource_dir.display()))]
    pub fn generate(&self) -> Result<GenerationReport, ManifestError> {
        let start = Instant::now();

        let assets = AssetIndexBuilder::with_walker_config(
            self.config.resource_dir.clone(),
            self.walker_config.clone(),
        )
        // A manifest left by an earlier run is output, not an asset.
        .excluding(PROJECT_MANIFEST_FILENAME)
        .build();

        let manifests = ManifestAssembler::new(self.config).assemble(assets);

        let paths = ManifestPaths::for_config(self.config);
        let written = ManifestWriter::new(paths.clone(), self.style).write(&manifests)?;

        info!(
            assets = manifests.assets().len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Generation complete"
        );

        Ok(GenerationReport {
            manifests,
            written,
            paths,
        })
    }
}
