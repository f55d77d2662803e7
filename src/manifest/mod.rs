//! Manifest Documents
//!
//! Asset index construction, document assembly and persistence.

pub mod document;
pub mod index;
pub mod writer;

pub use document::{ManifestAssembler, ManifestHeader, ManifestSet, ProjectManifest, VersionManifest};
pub use index::{AssetEntry, AssetIndex, AssetIndexBuilder};
pub use writer::{ManifestPaths, ManifestWriter, OutputStyle, RenderedManifests};
