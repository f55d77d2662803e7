//! Resource tree walker
//!
//! Recursion, hidden-entry filtering and path joining live here and never
//! branch on platform. Enumerating a single directory is delegated to a
//! [`DirectoryLister`].

use crate::tree::path;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Kind of a listed directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of a directory listing
#[derive(Debug, Clone)]
pub struct ListedEntry {
    /// Entry name without any parent component
    pub name: String,
    /// Full path of the entry on disk
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Lists the immediate children of one directory.
pub trait DirectoryLister {
    /// Fails only when the directory itself cannot be opened.
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>>;
}

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
}

/// Filesystem-backed lister, sorted by file name for determinism.
#[derive(Debug, Clone, Default)]
pub struct FsLister {
    config: WalkerConfig,
}

impl FsLister {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }
}

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    // Symlinks that are not followed, sockets and the like
                    // are treated as files; hashing decides if they are usable.
                    let kind = if entry.file_type().is_dir() {
                        EntryKind::Directory
                    } else {
                        EntryKind::File
                    };
                    entries.push(ListedEntry {
                        name: entry.file_name().to_string_lossy().into_owned(),
                        path: entry.path().to_path_buf(),
                        kind,
                    });
                }
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) if e.loop_ancestor().is_some() => {
                    // Reported as a directory; the walker skips it as a cycle.
                    let Some(child) = e.path().map(Path::to_path_buf) else {
                        return Err(e.into());
                    };
                    let Some(name) = child.file_name().map(|n| n.to_string_lossy().into_owned())
                    else {
                        return Err(e.into());
                    };
                    entries.push(ListedEntry {
                        name,
                        path: child,
                        kind: EntryKind::Directory,
                    });
                }
                Err(e) => {
                    // A child that cannot be inspected (e.g. a dangling
                    // symlink while following links) is kept as a file.
                    let Some(child) = e.path().map(Path::to_path_buf) else {
                        return Err(e.into());
                    };
                    let Some(name) = child.file_name().map(|n| n.to_string_lossy().into_owned())
                    else {
                        return Err(e.into());
                    };
                    debug!(path = %child.display(), error = %e, "Entry could not be inspected");
                    entries.push(ListedEntry {
                        name,
                        path: child,
                        kind: EntryKind::File,
                    });
                }
            }
        }

        Ok(entries)
    }
}

/// A regular file found under the walk root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Root-relative path with `/` separators and no leading slash
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

/// Depth-first walker over a resource root
pub struct Walker<L = FsLister> {
    root: PathBuf,
    lister: L,
}

impl Walker<FsLister> {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, WalkerConfig::default())
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self::with_lister(root, FsLister::new(config))
    }
}

impl<L: DirectoryLister> Walker<L> {
    pub fn with_lister(root: PathBuf, lister: L) -> Self {
        Self { root, lister }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and collect every non-hidden file.
    ///
    /// A root that cannot be listed produces an empty result.
    pub fn walk(&self) -> Vec<WalkedFile> {
        let mut files = Vec::new();
        let mut ancestors = vec![dir_identity(&self.root)];
        self.walk_dir(&self.root, "", &mut ancestors, &mut files);
        files
    }

    fn walk_dir(
        &self,
        dir: &Path,
        prefix: &str,
        ancestors: &mut Vec<PathBuf>,
        files: &mut Vec<WalkedFile>,
    ) {
        let entries = match self.lister.list(dir) {
            Ok(entries) => entries,
            Err(e) => {
                // Recorded as an empty subtree; the log line is the only
                // difference from a genuinely empty directory.
                warn!(dir = %dir.display(), error = %e, "Directory could not be listed, skipping");
                return;
            }
        };

        for entry in entries {
            if path::is_hidden(&entry.name) {
                continue;
            }

            let relative = path::join_relative(prefix, &entry.name);
            match entry.kind {
                EntryKind::Directory => {
                    let identity = dir_identity(&entry.path);
                    if ancestors.contains(&identity) {
                        warn!(path = %entry.path.display(), "Directory cycle through symlink, skipping");
                        continue;
                    }
                    let child_prefix = path::as_directory_prefix(&relative);
                    ancestors.push(identity);
                    self.walk_dir(&entry.path, &child_prefix, ancestors, files);
                    ancestors.pop();
                }
                EntryKind::File => files.push(WalkedFile {
                    relative_path: relative,
                    absolute_path: entry.path,
                }),
            }
        }
    }
}

/// Canonical location of a directory, used to detect symlink cycles.
///
/// Falls back to the path as given when it cannot be resolved.
fn dir_identity(dir: &Path) -> PathBuf {
    fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}
