use std::path::PathBuf;

use thiserror::Error;

/// Failure while enumerating a directory tree.
///
/// Produced by a directory scanner and passed through the video locator
/// untouched. Unreadable entries below the root are never reported here;
/// scanners skip them.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("scan root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scan task failed: {0}")]
    Task(String),
}

impl ScanError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::RootNotFound(_) => "root_not_found",
            Self::NotADirectory(_) => "not_a_directory",
            Self::Io(_) => "io_error",
            Self::Task(_) => "task_failed",
        }
    }
}
