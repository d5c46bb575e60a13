use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Represents the complete configuration for git-release.
///
/// Names the two project files that carry the version and the patterns used
/// when recording the release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

/// The two project files rewritten during a release.
///
/// Paths are relative to the project root (the source-control workdir).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_metadata_file")]
    pub metadata: String,

    #[serde(default = "default_manifest_file")]
    pub manifest: String,
}

fn default_metadata_file() -> String {
    "project.yaml".to_string()
}

fn default_manifest_file() -> String {
    "package.json".to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            metadata: default_metadata_file(),
            manifest: default_manifest_file(),
        }
    }
}

/// How the release is recorded in source control.
///
/// `{version}` in `tag_pattern` is replaced by the new version; `{tag}` in
/// `commit_message` is replaced by the rendered tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default = "default_push_remote")]
    pub push_remote: String,
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_commit_message() -> String {
    "Release {tag}".to_string()
}

fn default_push_remote() -> String {
    "origin".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_pattern: default_tag_pattern(),
            commit_message: default_commit_message(),
            push_remote: default_push_remote(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: FilesConfig::default(),
            release: ReleaseConfig::default(),
        }
    }
}

impl Config {
    /// Render the tag name for a version, e.g. "v1.2.3".
    pub fn tag_for(&self, version: &crate::version::Version) -> String {
        self.release
            .tag_pattern
            .replace("{version}", &version.to_string())
    }

    /// Render the commit message for a rendered tag, e.g. "Release v1.2.3".
    pub fn commit_message_for(&self, tag: &str) -> String {
        self.release.commit_message.replace("{tag}", tag)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrelease.toml` in the current directory
/// 3. `~/.config/.gitrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitrelease.toml").exists() {
        fs::read_to_string("./gitrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitrelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
