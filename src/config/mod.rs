//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use git_to_jj::config::{load_config, CONFIG_FILE_NAME};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(CONFIG_FILE_NAME), "default_bookmark: trunk").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.default_bookmark, "trunk");
//! assert_eq!(config.jj.program, "jj");
//! ```
//!
//! # Configuration File Location
//!
//! The nearest `.git-to-jj.yml` at or above the project directory is used.
//! `--config <path>` loads a specific file instead.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{GitToJjConfig, JjSettings, DEFAULT_BOOKMARK, DEFAULT_PROGRAM};
pub use validator::{validate, validate_config, ValidationError};
