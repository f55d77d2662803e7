//! Integration tests for hotmanifest

mod cli_binary;
mod hasher_verification;
mod run_determinism;
mod test_utils;
mod tree_structure;
