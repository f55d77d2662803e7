//! Integration tests for resource tree walking and asset indexing

use super::test_utils::ResourceFixture;
use hotmanifest::manifest::AssetIndexBuilder;
use hotmanifest::tree::hasher::compute_content_hash;
use hotmanifest::tree::walker::{Walker, WalkerConfig};
use hotmanifest::types::Fingerprint;

/// Visible files are indexed with forward-slash keys; hidden subtrees are not
#[test]
fn test_hidden_directory_is_excluded() {
    let fixture = ResourceFixture::new("1");
    fixture.write("a.txt", b"a");
    fixture.write("sub/b.txt", b"b");
    fixture.write(".hidden/c.txt", b"c");

    let index = AssetIndexBuilder::new(fixture.resource_dir()).build();

    assert_eq!(index.paths().collect::<Vec<_>>(), vec!["a.txt", "sub/b.txt"]);
}

/// A tree with only hidden entries yields an empty index
#[test]
fn test_only_hidden_entries() {
    let fixture = ResourceFixture::new("1");
    fixture.write(".gitignore", b"*");
    fixture.write(".svn/entries", b"x");

    assert!(AssetIndexBuilder::new(fixture.resource_dir()).build().is_empty());
}

/// Hidden files nested deep in visible directories are excluded too
#[test]
fn test_nested_hidden_file() {
    let fixture = ResourceFixture::new("1");
    fixture.write("res/ui/.DS_Store", b"junk");
    fixture.write("res/ui/panel.png", b"png");

    let index = AssetIndexBuilder::new(fixture.resource_dir()).build();

    assert_eq!(index.paths().collect::<Vec<_>>(), vec!["res/ui/panel.png"]);
}

/// Walk order is depth-first, sorted by name inside each directory
#[test]
fn test_depth_first_sorted_order() {
    let fixture = ResourceFixture::new("1");
    fixture.write("b.txt", b"");
    fixture.write("a/z.txt", b"");
    fixture.write("a/b/c.txt", b"");
    fixture.write("a.txt", b"");

    let files = Walker::new(fixture.resource_dir()).walk();
    let paths: Vec<_> = files.iter().map(|f| f.relative_path.as_str()).collect();

    assert_eq!(paths, vec!["a/b/c.txt", "a/z.txt", "a.txt", "b.txt"]);
}

/// Zero-length files are indexed with the empty digest
#[test]
fn test_empty_file_indexed() {
    let fixture = ResourceFixture::new("1");
    fixture.write("empty.dat", b"");

    let index = AssetIndexBuilder::new(fixture.resource_dir()).build();

    assert_eq!(
        index.get("empty.dat").map(|e| e.md5),
        Some(Fingerprint::Digest(compute_content_hash(b"")))
    );
}

/// An unreadable file keeps its entry with the placeholder hash
#[cfg(unix)]
#[test]
fn test_unreadable_file_gets_placeholder() {
    let fixture = ResourceFixture::new("1");
    fixture.write("ok.txt", b"fine");
    std::os::unix::fs::symlink(
        fixture.resource_dir().join("gone.txt"),
        fixture.resource_dir().join("broken.txt"),
    )
    .unwrap();

    let index = AssetIndexBuilder::new(fixture.resource_dir()).build();

    assert_eq!(index.paths().collect::<Vec<_>>(), vec!["broken.txt", "ok.txt"]);
    assert_eq!(index.get("broken.txt").map(|e| e.md5), Some(Fingerprint::Unreadable));
    assert_eq!(index.unreadable_count(), 1);
}

/// Symlinked directories are only descended into when following links
#[cfg(unix)]
#[test]
fn test_follow_symlinks_descends_into_linked_dir() {
    let fixture = ResourceFixture::new("1");
    fixture.write("real/a.txt", b"a");
    std::os::unix::fs::symlink(
        fixture.resource_dir().join("real"),
        fixture.resource_dir().join("link"),
    )
    .unwrap();

    let followed = AssetIndexBuilder::with_walker_config(
        fixture.resource_dir(),
        WalkerConfig {
            follow_symlinks: true,
        },
    )
    .build();
    assert_eq!(
        followed.paths().collect::<Vec<_>>(),
        vec!["link/a.txt", "real/a.txt"]
    );

    let unfollowed = AssetIndexBuilder::new(fixture.resource_dir()).build();
    assert_eq!(unfollowed.get("link").map(|e| e.md5), Some(Fingerprint::Unreadable));
}
