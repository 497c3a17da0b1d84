use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::CompletionError;

/// Application-level error type shared by every pipeline stage.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.jsonl` line that is not a valid record. Aborts the current pass.
    #[error("Malformed record at {}:{line}: {source}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
