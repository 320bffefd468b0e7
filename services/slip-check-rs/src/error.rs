use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlipError {
    /// The image exists but could not be opened or read while hashing.
    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SlipError {
    /// Stable code used in the JSON error record.
    pub fn code(&self) -> &'static str {
        match self {
            SlipError::FileAccess { .. } => "file_access_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, SlipError>;
