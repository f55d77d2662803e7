//! Asset index: relative path to fingerprint, in encounter order.

use crate::tree::hasher;
use crate::tree::walker::{DirectoryLister, FsLister, Walker, WalkerConfig};
use crate::types::Fingerprint;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Fingerprint record of one asset, serialized as `{"md5": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    pub md5: Fingerprint,
}

/// Ordered mapping from relative asset path to its record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    entries: Vec<(String, AssetEntry)>,
    positions: HashMap<String, usize>,
}

impl AssetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. An existing key is overwritten in place and keeps
    /// its original position.
    pub fn insert(&mut self, path: String, entry: AssetEntry) {
        match self.positions.get(&path) {
            Some(&idx) => self.entries[idx].1 = entry,
            None => {
                self.positions.insert(path.clone(), self.entries.len());
                self.entries.push((path, entry));
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&AssetEntry> {
        self.positions.get(path).map(|&idx| &self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relative paths in encounter order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    /// Number of entries carrying the placeholder fingerprint.
    pub fn unreadable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.md5.is_placeholder())
            .count()
    }
}

impl Serialize for AssetIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, entry) in &self.entries {
            map.serialize_entry(path, entry)?;
        }
        map.end()
    }
}

/// Builds an [`AssetIndex`] by walking and hashing a resource root.
pub struct AssetIndexBuilder<L = FsLister> {
    walker: Walker<L>,
    excluded: Vec<String>,
}

impl AssetIndexBuilder<FsLister> {
    pub fn new(root: PathBuf) -> Self {
        Self::with_walker(Walker::new(root))
    }

    pub fn with_walker_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self::with_walker(Walker::with_config(root, config))
    }
}

impl<L: DirectoryLister> AssetIndexBuilder<L> {
    pub fn with_walker(walker: Walker<L>) -> Self {
        Self {
            walker,
            excluded: Vec::new(),
        }
    }

    /// Leave a root-relative path out of the index.
    pub fn excluding(mut self, relative_path: impl Into<String>) -> Self {
        self.excluded.push(relative_path.into());
        self
    }

    /// Walk the root and fingerprint every file found.
    ///
    /// Unreadable files get the placeholder; the build itself cannot fail.
    #[instrument(skip(self), fields(root = %self.walker.root().display()))]
    pub fn build(&self) -> AssetIndex {
        let start = Instant::now();
        let files = self.walker.walk();
        debug!(file_count = files.len(), "Walked resource tree");

        let mut index = AssetIndex::new();
        for file in files {
            if self.excluded.contains(&file.relative_path) {
                debug!(path = %file.relative_path, "Excluded from index");
                continue;
            }
            let md5 = hasher::fingerprint_file(&file.absolute_path);
            index.insert(file.relative_path, AssetEntry { md5 });
        }

        info!(
            assets = index.len(),
            unreadable = index.unreadable_count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Asset index built"
        );
        index
    }
}
