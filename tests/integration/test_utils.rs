//! Shared test utilities for integration tests
//!
//! Provides a temporary output directory with a versioned resource
//! directory, so every test starts from an isolated tree.

use hotmanifest::config::{Configuration, RunInput, ToolSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary `<output>/<version>/` layout
pub struct ResourceFixture {
    temp_dir: TempDir,
    version: String,
}

impl ResourceFixture {
    pub fn new(version: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(version)).unwrap();
        Self {
            temp_dir,
            version: version.to_string(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_arg(&self) -> String {
        self.output_dir().to_string_lossy().into_owned()
    }

    pub fn resource_dir(&self) -> PathBuf {
        self.output_dir().join(&self.version)
    }

    /// Write a file below the resource directory, creating parents.
    pub fn write(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.resource_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn config(&self, base_url: &str) -> Configuration {
        let input = RunInput {
            url: Some(base_url.to_string()),
            version: Some(self.version.clone()),
            engine_version: None,
            output_dir: Some(self.output_arg()),
        };
        Configuration::resolve(&input, &ToolSettings::default()).unwrap()
    }

    pub fn read_json(&self, relative_to_output: &str) -> serde_json::Value {
        let text = fs::read_to_string(self.output_dir().join(relative_to_output)).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

/// Drop the only field that legitimately differs between runs.
pub fn without_creation_time(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(object) = value.as_object_mut() {
        object.remove("creationTime");
    }
    value
}
