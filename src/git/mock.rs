use std::sync::Mutex;

use crate::error::Result;
use crate::git::SourceControl;

/// Mock repository for testing without actual git operations.
///
/// Records every staging, commit, and tag call so tests can assert on the
/// exact sequence of side effects.
pub struct MockRepository {
    modified: Vec<String>,
    staged: Mutex<Vec<String>>,
    commits: Mutex<Vec<String>>,
    tags: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a mock with a clean workspace
    pub fn clean() -> Self {
        MockRepository {
            modified: Vec::new(),
            staged: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
            tags: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose workspace reports the given modified files
    pub fn dirty(files: &[&str]) -> Self {
        MockRepository {
            modified: files.iter().map(|f| f.to_string()).collect(),
            ..Self::clean()
        }
    }

    /// Paths staged so far
    pub fn staged(&self) -> Vec<String> {
        self.staged.lock().unwrap().clone()
    }

    /// Commit messages recorded so far
    pub fn commits(&self) -> Vec<String> {
        self.commits.lock().unwrap().clone()
    }

    /// Tags created so far
    pub fn tags(&self) -> Vec<String> {
        self.tags.lock().unwrap().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::clean()
    }
}

impl SourceControl for MockRepository {
    fn modified_files(&self) -> Result<Vec<String>> {
        Ok(self.modified.clone())
    }

    fn stage(&self, paths: &[&str]) -> Result<()> {
        let mut staged = self.staged.lock().unwrap();
        staged.extend(paths.iter().map(|p| p.to_string()));
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.commits.lock().unwrap().push(message.to_string());
        Ok(())
    }

    fn tag(&self, name: &str) -> Result<()> {
        self.tags.lock().unwrap().push(name.to_string());
        Ok(())
    }
}
