//! Error types for deployment file patching.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a [`PatchError`], stable across message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input supplied on the command line
    Validation,
    /// The deployment file or the requested chain entry does not exist
    NotFound,
    /// The deployment file exists but does not have the expected shape
    Parse,
    /// I/O faults and anything else raised at runtime
    Unexpected,
}

/// Errors raised while loading, patching, or writing a deployment file
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Chain key cannot be empty")]
    EmptyChainKey,

    #[error("{} not found in {}", .file.display(), search_location(.file))]
    FileNotFound { file: PathBuf },

    #[error("Chain key '{chain_key}' not found in {}", .file.display())]
    ChainNotFound {
        chain_key: String,
        file: PathBuf,
        available: Vec<String>,
    },

    #[error("Error parsing {}: {source}", .file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("Missing key in {}: '{key}' is not a table", .file.display())]
    NotATable { file: PathBuf, key: String },

    #[error("Unexpected error: {}: {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected error: invalid settings: {0}")]
    Settings(String),

    #[error("Unexpected error: failed to initialize logging: {0}")]
    Logging(String),

    #[error("Unexpected error: failed to render report: {0}")]
    Render(String),
}

impl PatchError {
    pub fn io(file: &Path, source: std::io::Error) -> Self {
        PatchError::Io {
            file: file.to_path_buf(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PatchError::EmptyChainKey => ErrorCategory::Validation,
            PatchError::FileNotFound { .. } | PatchError::ChainNotFound { .. } => {
                ErrorCategory::NotFound
            }
            PatchError::Parse { .. } | PatchError::NotATable { .. } => ErrorCategory::Parse,
            PatchError::Io { .. }
            | PatchError::Settings(_)
            | PatchError::Logging(_)
            | PatchError::Render(_) => ErrorCategory::Unexpected,
        }
    }

    /// Process exit status for this error. Every failure is terminal and reported as 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<config::ConfigError> for PatchError {
    fn from(err: config::ConfigError) -> Self {
        PatchError::Settings(err.to_string())
    }
}

/// Where a missing file was looked for, phrased for the user.
fn search_location(file: &Path) -> String {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.display().to_string(),
        _ => "current directory".to_string(),
    }
}
