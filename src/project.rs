//! Project file access - reading and rewriting the two version locations.
//!
//! File I/O goes through the [FileStore] trait so the release workflow can be
//! exercised against an in-memory store in tests. The version is patched with
//! a documented matching rule per file: only the version digits are replaced,
//! every surrounding byte is preserved.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use regex::Regex;

use crate::config::FilesConfig;
use crate::error::{ReleaseError, Result};
use crate::version::Version;

/// First line of the metadata file of the form `release-version: X.Y.Z`.
const METADATA_PATTERN: &str = r"(?m)^(release-version:[ \t]*)(\d+\.\d+\.\d+)([ \t]*)$";

/// First occurrence of a manifest field of the form `"version": "X.Y.Z"`.
const MANIFEST_PATTERN: &str = r#"("version"[ \t]*:[ \t]*")(\d+\.\d+\.\d+)(")"#;

/// Abstraction over text file access
pub trait FileStore {
    /// Read the full contents of a file
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the full contents of a file
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Real filesystem-backed store
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReleaseError::MissingFile(path.to_path_buf())
            } else {
                ReleaseError::Io(e)
            }
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)
            .map_err(|e| ReleaseError::persistence(format!("cannot write {}: {}", path.display(), e)))
    }
}

/// In-memory store for testing without a real filesystem
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        MemoryStore {
            files: Mutex::new(HashMap::new()),
        }
    }

    /// Seed a file with contents
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.lock().unwrap().insert(path.into(), contents.into());
    }

    /// Current contents of a file, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ReleaseError::MissingFile(path.to_path_buf()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// The two project files that carry the version, resolved against a root.
pub struct ProjectFiles<S> {
    root: PathBuf,
    metadata: String,
    manifest: String,
    store: S,
}

impl<S: FileStore> ProjectFiles<S> {
    /// Create project file access rooted at the source-control workdir
    pub fn new(root: impl Into<PathBuf>, files: &FilesConfig, store: S) -> Self {
        ProjectFiles {
            root: root.into(),
            metadata: files.metadata.clone(),
            manifest: files.manifest.clone(),
            store,
        }
    }

    /// Workdir-relative paths of the two files, for staging
    pub fn tracked_files(&self) -> [&str; 2] {
        [&self.metadata, &self.manifest]
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    fn metadata_path(&self) -> PathBuf {
        self.root.join(&self.metadata)
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    /// Read the current version from the metadata file.
    ///
    /// The version is taken from the first line matching
    /// `release-version: X.Y.Z` and validated strictly.
    pub fn read_version(&self) -> Result<Version> {
        let path = self.metadata_path();
        let contents = self.store.read(&path)?;

        let re = Regex::new(r"(?m)^release-version:[ \t]*(\S+)[ \t]*$")
            .map_err(|e| ReleaseError::invalid_version(e.to_string()))?;

        let raw = re
            .captures(&contents)
            .and_then(|c| c.get(1))
            .ok_or_else(|| {
                ReleaseError::invalid_version(format!(
                    "no 'release-version:' line in {}",
                    path.display()
                ))
            })?;

        Version::parse(raw.as_str())
    }

    /// Write the new version into both files.
    ///
    /// Both replacement texts are computed before either file is written, so
    /// a file whose version field cannot be located aborts the whole
    /// operation with no partial edit.
    pub fn write_version(&self, new: &Version) -> Result<()> {
        let metadata_path = self.metadata_path();
        let manifest_path = self.manifest_path();

        let patched_metadata = patch_first(
            &self.store.read(&metadata_path)?,
            METADATA_PATTERN,
            new,
            &metadata_path,
        )?;
        let patched_manifest = patch_first(
            &self.store.read(&manifest_path)?,
            MANIFEST_PATTERN,
            new,
            &manifest_path,
        )?;

        self.store.write(&metadata_path, &patched_metadata)?;
        self.store.write(&manifest_path, &patched_manifest)?;
        Ok(())
    }
}

/// Replace the version digits in the first match of `pattern`.
///
/// The pattern must have three capture groups: prefix, version, suffix. Only
/// the middle group is substituted.
fn patch_first(contents: &str, pattern: &str, new: &Version, path: &Path) -> Result<String> {
    let re = Regex::new(pattern).map_err(|e| ReleaseError::persistence(e.to_string()))?;

    if !re.is_match(contents) {
        return Err(ReleaseError::persistence(format!(
            "no version field found in {}",
            path.display()
        )));
    }

    let replacement = format!("${{1}}{}${{3}}", new);
    Ok(re.replace(contents, replacement.as_str()).into_owned())
}
