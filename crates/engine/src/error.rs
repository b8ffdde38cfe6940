use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the whole scan.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Root directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("Root path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot access root directory '{}': {source}", .path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Per-file outcome of the line counter.
///
/// `Decode` is recoverable: the scan skips the file and keeps going.
/// `Io` is fatal and becomes [`EngineError::FileRead`] in the scan loop.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("'{}' is not valid UTF-8 text (invalid sequence at byte {offset})", .path.display())]
    Decode { path: PathBuf, offset: u64 },

    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
