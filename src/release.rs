//! Release workflow orchestration
//!
//! Sequences the end-to-end release: preflight → read current version →
//! compute new version → confirm → persist → commit + tag. Every step is a
//! hard gate; nothing durable is mutated before the persist step. File
//! access, source control, and the confirmation prompt are all injected so
//! the whole flow runs against in-memory fakes in tests.

use crate::config::Config;
use crate::error::{ReleaseError, Result};
use crate::git::SourceControl;
use crate::project::{FileStore, ProjectFiles};
use crate::version::{Part, Version};

/// Result of a release run that was not aborted by an error
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// The release was recorded
    Completed(ReleaseSummary),
    /// The user declined the confirmation prompt; nothing was changed
    Cancelled,
}

/// What a completed release produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseSummary {
    /// Version before the bump
    pub previous: Version,
    /// Version that was released
    pub released: Version,
    /// Name of the tag created at the release commit
    pub tag: String,
}

/// Run the release workflow.
///
/// `confirm` is called once with the current and the proposed version; a
/// `false` answer cancels the release cleanly (this is a user choice, not a
/// failure).
pub fn run_release<R, S, C>(
    part: Part,
    config: &Config,
    files: &ProjectFiles<S>,
    repo: &R,
    confirm: C,
) -> Result<ReleaseOutcome>
where
    R: SourceControl,
    S: FileStore,
    C: FnOnce(&Version, &Version) -> Result<bool>,
{
    // Preflight: refuse to release on top of uncommitted changes
    let modified = repo.modified_files()?;
    if !modified.is_empty() {
        return Err(ReleaseError::DirtyWorkspace { files: modified });
    }

    let current = files.read_version()?;
    let next = current.bump(part);

    if !confirm(&current, &next)? {
        return Ok(ReleaseOutcome::Cancelled);
    }

    files.write_version(&next)?;

    let tag = config.tag_for(&next);
    let tracked = files.tracked_files();
    repo.stage(&tracked)?;
    repo.commit(&config.commit_message_for(&tag))?;
    repo.tag(&tag)?;

    Ok(ReleaseOutcome::Completed(ReleaseSummary {
        previous: current,
        released: next,
        tag,
    }))
}
