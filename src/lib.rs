//! Hotmanifest: hot-update manifest generation
//!
//! Walks a versioned resource directory, fingerprints every asset and writes
//! the `project.manifest` and `version.manifest` files hot-update clients
//! poll for changes.

pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod manifest;
pub mod tree;
pub mod types;
