//! Error types for git-to-jj operations.
//!
//! This module defines [`GitToJjError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A jj call that exits non-zero becomes [`GitToJjError::DelegateFailed`] and
//!   is fatal to the current command
//! - A conflicted `switch` is reverted first, then reported as
//!   [`GitToJjError::SwitchConflict`]
//! - Use `anyhow::Error` (via `GitToJjError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for git-to-jj operations.
#[derive(Debug, Error)]
pub enum GitToJjError {
    /// A jj call ran but exited unsuccessfully.
    #[error("{}: {command}{}", format_failure(.code), format_stderr(.stderr))]
    DelegateFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The jj executable could not be started at all.
    #[error("Failed to run '{program}': {message}")]
    DelegateSpawn { program: String, message: String },

    /// Rebasing onto the target branch produced a conflict and was undone.
    #[error(
        "Your changes conflict with '{branch}'; the switch was undone.\n\
         Please commit your changes or stash them before you switch branches."
    )]
    SwitchConflict { branch: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GitToJjError {
    /// Process exit code to report for this error.
    ///
    /// A failed jj call hands its own exit code through; everything else
    /// exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DelegateFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn format_failure(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("Command failed with exit code {}", code),
        None => "Command terminated by signal".to_string(),
    }
}

fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// Result type alias for git-to-jj operations.
pub type Result<T> = std::result::Result<T, GitToJjError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegate_failed_displays_command_and_code() {
        let err = GitToJjError::DelegateFailed {
            command: "jj rebase --source @- --destination nope".into(),
            code: Some(1),
            stderr: String::new(),
        };
        let msg = err.to_string();
        assert!(msg.contains("jj rebase --source @- --destination nope"));
        assert!(msg.starts_with("Command failed with exit code 1: "));
        assert!(!msg.contains("Some("));
        assert!(!msg.ends_with('\n'));
    }

    #[test]
    fn delegate_failed_appends_captured_stderr() {
        let err = GitToJjError::DelegateFailed {
            command: "jj diff --revisions @-".into(),
            code: Some(1),
            stderr: "Error: There is no jj repo in \".\"\n".into(),
        };
        let msg = err.to_string();
        assert!(msg.ends_with("Error: There is no jj repo in \".\""));
    }

    #[test]
    fn delegate_failed_exit_code_is_passed_through() {
        let err = GitToJjError::DelegateFailed {
            command: "jj bookmark delete main".into(),
            code: Some(2),
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn delegate_killed_by_signal_exits_with_one() {
        let err = GitToJjError::DelegateFailed {
            command: "jj new".into(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Command terminated by signal: jj new");
    }

    #[test]
    fn switch_conflict_names_the_branch() {
        let err = GitToJjError::SwitchConflict {
            branch: "feature".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'feature'"));
        assert!(msg.ends_with(
            "Please commit your changes or stash them before you switch branches."
        ));
    }

    #[test]
    fn switch_conflict_tells_user_to_commit_or_stash() {
        let err = GitToJjError::SwitchConflict {
            branch: "feature".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please commit your changes or stash them before you switch branches."
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn delegate_spawn_displays_program() {
        let err = GitToJjError::DelegateSpawn {
            program: "/opt/jj".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/jj"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GitToJjError::ConfigParseError {
            path: PathBuf::from("/repo/.git-to-jj.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/repo/.git-to-jj.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GitToJjError = io_err.into();
        assert!(matches!(err, GitToJjError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
