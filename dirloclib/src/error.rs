//! Error types for dirloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning and counting
#[derive(Error, Debug)]
pub enum DirlocError {
    /// Failed to read a file as UTF-8 text
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An extension group was configured with unusable extensions
    #[error("invalid extension group '{id}': {message}")]
    InvalidGroup { id: String, message: String },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A directory could not be listed during traversal
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<walkdir::Error> for DirlocError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        DirlocError::Walk { path, source: err }
    }
}
