use std::path::{Path, PathBuf};

use git2::{Repository as Git2Repo, StatusOptions};

use crate::error::{ReleaseError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository starting at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            ReleaseError::source_control(format!("not inside a git repository: {}", e))
        })?;

        Ok(Git2Repository { repo })
    }

    /// The repository working directory (the project root)
    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| ReleaseError::source_control("repository has no working directory"))
    }
}

impl super::SourceControl for Git2Repository {
    fn modified_files(&self) -> Result<Vec<String>> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;

        let mut files = Vec::new();
        for entry in statuses.iter() {
            if entry.status() == git2::Status::CURRENT {
                continue;
            }
            if let Some(path) = entry.path() {
                files.push(path.to_string());
            }
        }

        files.sort();
        Ok(files)
    }

    fn stage(&self, paths: &[&str]) -> Result<()> {
        let mut index = self.repo.index()?;

        for path in paths {
            index.add_path(Path::new(path)).map_err(|e| {
                ReleaseError::source_control(format!("cannot stage '{}': {}", path, e))
            })?;
        }

        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| {
                ReleaseError::source_control(format!("repository has no commit at HEAD: {}", e))
            })?;

        let signature = self.repo.signature().map_err(|e| {
            ReleaseError::source_control(format!("no committer identity configured: {}", e))
        })?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        Ok(())
    }

    fn tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| {
                if e.code() == git2::ErrorCode::Exists {
                    ReleaseError::source_control(format!("tag '{}' already exists", name))
                } else {
                    ReleaseError::source_control(format!("cannot create tag '{}': {}", name, e))
                }
            })?;

        Ok(())
    }
}
