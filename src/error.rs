//! Error types for manifest generation.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to fingerprint a single file.
///
/// Never fatal: the index builder records a placeholder and keeps walking.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid run configuration, detected before anything is written.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Incorrect URL format:\n{0}")]
    InvalidUrl(String),

    #[error("Incorrect version format:\n{0}")]
    InvalidVersion(String),

    #[error("Incorrect engine version format:\n{0}")]
    InvalidEngineVersion(String),

    #[error("The output path cannot be accessed:\n{}", .0.display())]
    OutputPathInaccessible(PathBuf),

    #[error("The resources path cannot be accessed:\n{}", .0.display())]
    ResourcePathInaccessible(PathBuf),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Settings(err.to_string())
    }
}

/// Errors surfaced by the generation pipeline.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to serialize {name}: {source}")]
    Serialize {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write manifest file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Process exit status, one per failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    ShowHelp,
    IncorrectArgs,
    IncorrectUrl,
    IncorrectVersion,
    IncorrectEngineVersion,
    IncorrectOutputPath,
    IncorrectResPath,
    ManifestWriteError,
    UnknownError,
}

impl ExitStatus {
    /// Numeric process exit code.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Ok => 0,
            ExitStatus::ShowHelp => 1,
            ExitStatus::IncorrectArgs => 2,
            ExitStatus::IncorrectUrl => 3,
            ExitStatus::IncorrectVersion => 4,
            ExitStatus::IncorrectEngineVersion => 5,
            ExitStatus::IncorrectOutputPath => 6,
            ExitStatus::IncorrectResPath => 7,
            ExitStatus::ManifestWriteError => 8,
            ExitStatus::UnknownError => -1,
        }
    }
}

impl From<&ConfigError> for ExitStatus {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidUrl(_) => ExitStatus::IncorrectUrl,
            ConfigError::InvalidVersion(_) => ExitStatus::IncorrectVersion,
            ConfigError::InvalidEngineVersion(_) => ExitStatus::IncorrectEngineVersion,
            ConfigError::OutputPathInaccessible(_) => ExitStatus::IncorrectOutputPath,
            ConfigError::ResourcePathInaccessible(_) => ExitStatus::IncorrectResPath,
            ConfigError::Settings(_) => ExitStatus::IncorrectArgs,
        }
    }
}

impl From<&ManifestError> for ExitStatus {
    fn from(err: &ManifestError) -> Self {
        match err {
            ManifestError::Config(e) => ExitStatus::from(e),
            ManifestError::Write { .. } => ExitStatus::ManifestWriteError,
            ManifestError::Serialize { .. } | ManifestError::Logging(_) => {
                ExitStatus::UnknownError
            }
        }
    }
}
