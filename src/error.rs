use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for git-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Workspace has uncommitted changes:{}", format_file_list(.files))]
    DirtyWorkspace { files: Vec<String> },

    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Invalid part: '{0}' (expected major, minor or patch)")]
    InvalidPart(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Source control error: {0}")]
    SourceControl(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

fn format_file_list(files: &[String]) -> String {
    files.iter().map(|f| format!("\n  {}", f)).collect()
}

impl ReleaseError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        ReleaseError::Usage(msg.into())
    }

    /// Create a version format error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidVersion(msg.into())
    }

    /// Create a persistence error with context
    pub fn persistence(msg: impl Into<String>) -> Self {
        ReleaseError::Persistence(msg.into())
    }

    /// Create a source-control error with context
    pub fn source_control(msg: impl Into<String>) -> Self {
        ReleaseError::SourceControl(msg.into())
    }
}
