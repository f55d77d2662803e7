//! Integration tests for repeatable runs

use super::test_utils::{without_creation_time, ResourceFixture};
use hotmanifest::generation::ManifestGenerator;
use hotmanifest::manifest::OutputStyle;

fn populate(fixture: &ResourceFixture) {
    fixture.write("main.lua", b"require 'game'");
    fixture.write("src/game.lua", b"return {}");
    fixture.write("res/img/logo.png", &[0x89, 0x50, 0x4e, 0x47]);
    fixture.write("res/.DS_Store", b"junk");
}

/// Two runs over an unchanged tree differ only in creationTime
#[test]
fn test_rerun_is_stable() {
    let fixture = ResourceFixture::new("2");
    populate(&fixture);
    let config = fixture.config("http://cdn.example.com/game/");

    ManifestGenerator::new(&config, OutputStyle::Pretty)
        .generate()
        .unwrap();
    let first_project = without_creation_time(fixture.read_json("2/project.manifest"));
    let first_version = without_creation_time(fixture.read_json("version.manifest"));

    // The second run sees the first run's project.manifest inside the resource directory.
    ManifestGenerator::new(&config, OutputStyle::Pretty)
        .generate()
        .unwrap();
    let second_project = without_creation_time(fixture.read_json("2/project.manifest"));
    let second_version = without_creation_time(fixture.read_json("version.manifest"));

    assert_eq!(first_project, second_project);
    assert_eq!(first_version, second_version);
    assert!(second_project["assets"].get("project.manifest").is_none());
}

/// Asset keys come out in the same order on every run
#[test]
fn test_asset_order_stable() {
    let fixture = ResourceFixture::new("2");
    populate(&fixture);
    let config = fixture.config("http://cdn.example.com/game/");

    let first = ManifestGenerator::new(&config, OutputStyle::Compact)
        .generate()
        .unwrap();
    let second = ManifestGenerator::new(&config, OutputStyle::Compact)
        .generate()
        .unwrap();

    let first_keys: Vec<&str> = first.manifests.assets().paths().collect();
    let second_keys: Vec<&str> = second.manifests.assets().paths().collect();
    assert_eq!(first_keys, second_keys);
    assert_eq!(first_keys, vec!["main.lua", "res/img/logo.png", "src/game.lua"]);
}

/// Changing one file changes exactly one asset digest
#[test]
fn test_content_change_detected() {
    let fixture = ResourceFixture::new("2");
    populate(&fixture);
    let config = fixture.config("http://cdn.example.com/game/");

    ManifestGenerator::new(&config, OutputStyle::Compact)
        .generate()
        .unwrap();
    let before = fixture.read_json("project.manifest");

    fixture.write("src/game.lua", b"return { level = 2 }");
    ManifestGenerator::new(&config, OutputStyle::Compact)
        .generate()
        .unwrap();
    let after = fixture.read_json("project.manifest");

    assert_ne!(
        before["assets"]["src/game.lua"],
        after["assets"]["src/game.lua"]
    );
    assert_eq!(before["assets"]["main.lua"], after["assets"]["main.lua"]);
    assert_eq!(
        before["assets"]["res/img/logo.png"],
        after["assets"]["res/img/logo.png"]
    );
}
