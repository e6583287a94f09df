use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::tree::{TreeOptions, DEFAULT_IGNORED_DIRS};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Directory names skipped during traversal
    pub ignored_dirs: Vec<String>,
    /// Maximum depth to descend (unset = unlimited)
    pub max_depth: Option<usize>,
    /// Classify symlinks by their target
    pub follow_symlinks: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            max_depth: None,
            follow_symlinks: true,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the file in the user config
    /// directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        tracing::debug!(path = %path.display(), "Reading config file");

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|source| ConfigError::ParseError { path, source })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for name in &self.tree.ignored_dirs {
            if name.is_empty() {
                return Err(ConfigError::Invalid(
                    "ignored directory name must not be empty".into(),
                ));
            }
            if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
                return Err(ConfigError::Invalid(format!(
                    "ignored directory name '{}' must be a base name, not a path",
                    name
                )));
            }
        }
        if self.tree.max_depth == Some(0) {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(())
    }

    /// Options for the renderer derived from this configuration
    pub fn tree_options(&self) -> TreeOptions {
        let options = TreeOptions::new()
            .with_ignored(self.tree.ignored_dirs.iter().cloned())
            .with_follow_symlinks(self.tree.follow_symlinks);
        match self.tree.max_depth {
            Some(depth) => options.with_max_depth(depth),
            None => options,
        }
    }
}

/// `<config dir>/dirtree/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dirtree").join("config.toml"))
}
