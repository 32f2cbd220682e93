//! Configuration file discovery and loading.

use crate::config::schema::GitToJjConfig;
use crate::config::validator::validate;
use crate::error::{GitToJjError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = ".git-to-jj.yml";

/// Find the configuration file by walking up from `start`.
///
/// # Returns
///
/// The path to the nearest `.git-to-jj.yml`, or None if not found.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GitToJjConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GitToJjError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GitToJjError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<GitToJjConfig> {
    if content.trim().is_empty() {
        return Ok(GitToJjConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GitToJjError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the config for a project.
///
/// If `config_override` is provided, only that file is loaded and it must
/// exist. Otherwise the nearest `.git-to-jj.yml` above `project_root` is
/// used, falling back to defaults when there is none.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<GitToJjConfig> {
    let config = match config_override {
        Some(path) => load_config_file(path)?,
        None => match find_config_file(project_root) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                load_config_file(&path)?
            }
            None => GitToJjConfig::default(),
        },
    };

    validate(&config)?;
    Ok(config)
}
