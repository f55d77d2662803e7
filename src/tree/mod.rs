//! Resource Tree
//!
//! Enumerates and fingerprints the files of a resource directory.

pub mod hasher;
pub mod path;
pub mod walker;
