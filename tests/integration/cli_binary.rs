//! Integration tests driving the compiled binary

use super::test_utils::ResourceFixture;
use std::process::{Command, Output};

fn hotmanifest(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hotmanifest"))
        .args(args)
        .env_remove("HOTMANIFEST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_no_arguments_shows_help() {
    let output = hotmanifest(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_legacy_flags_generate_manifests() {
    let fixture = ResourceFixture::new("3");
    fixture.write("a.txt", b"a");
    let out = fixture.output_arg();

    let output = hotmanifest(&[
        "-url",
        "http://example.com/",
        "-version",
        "3",
        "-ev",
        "3.17",
        "-o",
        &out,
        "--compact",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Manifest files generated."));

    let version = fixture.read_json("version.manifest");
    assert_eq!(version["engineVersion"], "3.17");
    assert_eq!(version["packageUrl"], "http://example.com/3/");
    assert!(fixture.output_dir().join("project.manifest").is_file());
    assert!(fixture.resource_dir().join("project.manifest").is_file());
}

#[test]
fn test_bad_url_exit_code() {
    let fixture = ResourceFixture::new("3");
    let out = fixture.output_arg();

    let output = hotmanifest(&["-url", "ftp://example.com/", "-version", "3", "-o", &out]);

    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Incorrect URL format:"));
    assert!(!fixture.output_dir().join("version.manifest").exists());
}

#[test]
fn test_missing_resource_dir_exit_code() {
    let fixture = ResourceFixture::new("3");
    let out = fixture.output_arg();

    let output = hotmanifest(&["-url", "http://example.com/", "-version", "4", "-o", &out]);

    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn test_unknown_flag_exit_code() {
    let output = hotmanifest(&["--bogus"]);
    assert_eq!(output.status.code(), Some(2));
}
