//! Error types and exit codes for wikigraph.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

/// Main error type for wikigraph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid ignore pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("file {path} lies outside the wiki root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Exit code reported when this error aborts the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            GraphError::Pattern(_) | GraphError::Config(_) | GraphError::ConfigParse(_) => {
                exit_code::CONFIG_ERROR
            }
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for wikigraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
