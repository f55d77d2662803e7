//! Content hashing for asset files using MD5
//!
//! MD5 is what hot-update clients compare against, so it is kept for
//! manifest compatibility. It is not a security boundary.

use crate::error::HashError;
use crate::types::{ContentHash, Fingerprint};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{trace, warn};

/// Compute content hash for file bytes
pub fn compute_content_hash(content: &[u8]) -> ContentHash {
    let mut hasher = Md5::new();
    hasher.update(content);
    hasher.finalize().into()
}

/// Render a content hash as 32 lowercase hex characters.
pub fn to_hex(hash: &ContentHash) -> String {
    hex::encode(hash)
}

/// Read a whole file and hash it.
///
/// Every call reads the file fresh; nothing is cached.
pub fn hash_file(path: &Path) -> Result<ContentHash, HashError> {
    let mut file = File::open(path).map_err(|source| HashError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|source| HashError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    trace!(path = %path.display(), bytes = content.len(), "Hashed file");
    Ok(compute_content_hash(&content))
}

/// Fingerprint a file, substituting the placeholder when it cannot be read.
pub fn fingerprint_file(path: &Path) -> Fingerprint {
    match hash_file(path) {
        Ok(hash) => Fingerprint::Digest(hash),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Recording placeholder hash");
            Fingerprint::Unreadable
        }
    }
}
