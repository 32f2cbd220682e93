//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.git-to-jj.yml` file format.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default jj executable.
pub const DEFAULT_PROGRAM: &str = "jj";

/// Default bookmark created by `init`.
pub const DEFAULT_BOOKMARK: &str = "main";

/// Root configuration structure for `.git-to-jj.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitToJjConfig {
    /// How to invoke jj
    pub jj: JjSettings,

    /// Echo each jj command to stderr before running it
    pub echo_commands: bool,

    /// Bookmark created by `init`
    pub default_bookmark: String,
}

impl Default for GitToJjConfig {
    fn default() -> Self {
        Self {
            jj: JjSettings::default(),
            echo_commands: true,
            default_bookmark: DEFAULT_BOOKMARK.to_string(),
        }
    }
}

/// Settings for the jj executable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JjSettings {
    /// Executable name or path
    pub program: String,

    /// Extra environment variables for every jj call
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

impl Default for JjSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            env: HashMap::new(),
        }
    }
}
