//! Path normalization utilities
//!
//! Asset keys always use `/` no matter which platform produced them, while
//! filesystem paths keep the native separator.

use std::path::{PathBuf, MAIN_SEPARATOR};

/// Whether a directory entry name marks a hidden entry.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Append an entry name to a relative asset prefix.
///
/// The prefix is either empty or ends with `/`.
pub fn join_relative(prefix: &str, name: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + name.len());
    joined.push_str(prefix);
    joined.push_str(name);
    joined
}

/// Turn a relative file path into the prefix used for its children.
pub fn as_directory_prefix(relative: &str) -> String {
    let mut prefix = relative.to_string();
    if !prefix.is_empty() && !prefix.ends_with('/') {
        prefix.push('/');
    }
    prefix
}

/// Ensure a URL ends with `/`.
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Ensure a directory path string ends with the platform separator.
///
/// An empty input becomes the current directory.
pub fn ensure_trailing_separator(path: &str) -> PathBuf {
    if path.is_empty() {
        return PathBuf::from(format!(".{}", MAIN_SEPARATOR));
    }
    if path.ends_with(MAIN_SEPARATOR) {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{}{}", path, MAIN_SEPARATOR))
    }
}
