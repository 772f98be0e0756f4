//! Unified error types for MenuNav
//!
//! Tree operations are total and never fail; errors only come from the
//! scanner touching the real file system and from configuration loading.

use std::path::PathBuf;

/// Unified error type for MenuNav operations
#[derive(Debug, thiserror::Error)]
pub enum MenuNavError {
    /// I/O errors (directory reads, config file reads, output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A path could not be used as a scan root
    #[error("Path error: {path} - {reason}")]
    Path { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using MenuNavError
pub type Result<T> = std::result::Result<T, MenuNavError>;

impl MenuNavError {
    /// Create a Path error
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an Internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<toml::de::Error> for MenuNavError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MenuNavError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
