//! Source-control abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations a
//! release needs, allowing for a real implementation backed by the `git2`
//! crate and a mock implementation for testing.
//!
//! Most code should depend on the [SourceControl] trait rather than concrete
//! implementations.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Source-control operations required by the release workflow.
///
/// The release never touches a remote: pushing is a deliberate manual
/// follow-up step outside this contract.
pub trait SourceControl {
    /// Workdir-relative paths with uncommitted changes (index or worktree).
    ///
    /// Untracked files are included, ignored files are not. An empty list
    /// means the workspace is clean.
    fn modified_files(&self) -> Result<Vec<String>>;

    /// Add the named workdir-relative paths to the index
    fn stage(&self, paths: &[&str]) -> Result<()>;

    /// Commit the index on HEAD with the given message
    fn commit(&self, message: &str) -> Result<()>;

    /// Create a lightweight tag at HEAD; fails if the tag already exists
    fn tag(&self, name: &str) -> Result<()>;
}
