//! Configuration validation rules.
//!
//! - `jj.program` must not be empty
//! - `default_bookmark` must be a non-empty name without whitespace

use crate::config::schema::GitToJjConfig;
use crate::error::{GitToJjError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &GitToJjConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.jj.program.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-program".to_string(),
            message: "'jj.program' must not be empty".to_string(),
        });
    }

    let bookmark = &config.default_bookmark;
    if bookmark.is_empty() {
        errors.push(ValidationError {
            rule: "empty-bookmark".to_string(),
            message: "'default_bookmark' must not be empty".to_string(),
        });
    } else if bookmark.contains(char::is_whitespace) {
        errors.push(ValidationError {
            rule: "invalid-bookmark".to_string(),
            message: format!(
                "'default_bookmark' must not contain whitespace (got '{}')",
                bookmark
            ),
        });
    }

    errors
}

/// Validate a configuration, returning an error if invalid.
pub fn validate(config: &GitToJjConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let message = errors
            .iter()
            .map(|e| format!("{} [{}]", e.message, e.rule))
            .collect::<Vec<_>>()
            .join("; ");
        Err(GitToJjError::ConfigValidationError { message })
    }
}
