//! Hasher Implementation Verification Tests
//!
//! Tests to verify that our hasher implementation correctly uses MD5
//! and renders digests the way clients compare them.

use hotmanifest::tree::hasher;
use hotmanifest::types::Fingerprint;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test that content hash matches the md-5 crate directly
#[test]
fn test_content_hash_matches_md5() {
    use md5::{Digest, Md5};

    let content = b"test content";

    let our_hash = hasher::compute_content_hash(content);
    let direct: [u8; 16] = Md5::digest(content).into();

    assert_eq!(our_hash, direct);
}

/// Test that the empty input hashes to the zero-byte digest, not the placeholder
#[test]
fn test_empty_input_digest() {
    let hex = hasher::to_hex(&hasher::compute_content_hash(&[]));
    assert_eq!(hex, "d41d8cd98f00b204e9800998ecf8427e");
    assert_ne!(hex, "...");
}

/// Test that file hashing reads the whole file, including large ones
#[test]
fn test_large_file_hash() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("big.bin");
    let content: Vec<u8> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).unwrap();

    assert_eq!(
        hasher::hash_file(&path).unwrap(),
        hasher::compute_content_hash(&content)
    );
}

/// Test that a file is re-read on every call
#[test]
fn test_no_caching_between_calls() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("changing.txt");

    fs::write(&path, "one").unwrap();
    let first = hasher::fingerprint_file(&path);
    fs::write(&path, "two").unwrap();
    let second = hasher::fingerprint_file(&path);

    assert_ne!(first, second);
    assert_eq!(second, Fingerprint::Digest(hasher::compute_content_hash(b"two")));
}

proptest! {
    #[test]
    fn prop_hash_is_deterministic_lowercase_hex(content in any::<Vec<u8>>()) {
        let first = hasher::to_hex(&hasher::compute_content_hash(&content));
        let second = hasher::to_hex(&hasher::compute_content_hash(&content));

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 32);
        prop_assert!(first.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
