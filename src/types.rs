//! Shared constants and value types.

use serde::{Serialize, Serializer};
use std::fmt;

/// File name of the project manifest (asset index plus metadata).
pub const PROJECT_MANIFEST_FILENAME: &str = "project.manifest";

/// File name of the version manifest (metadata only).
pub const VERSION_MANIFEST_FILENAME: &str = "version.manifest";

/// Engine version recorded when none is configured.
pub const DEFAULT_ENGINE_VERSION: &str = "3.7";

/// Fingerprint recorded for a file whose content could not be read.
pub const HASH_PLACEHOLDER: &str = "...";

/// Tool name used in the `creator` field and the banner.
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Tool version used in the `creator` field and the banner.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 128-bit content digest.
pub type ContentHash = [u8; 16];

/// Fingerprint of one asset as recorded in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fingerprint {
    Digest(ContentHash),
    /// The file was listed but could not be read.
    Unreadable,
}

impl Fingerprint {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Fingerprint::Unreadable)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fingerprint::Digest(hash) => f.write_str(&hex::encode(hash)),
            Fingerprint::Unreadable => f.write_str(HASH_PLACEHOLDER),
        }
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
