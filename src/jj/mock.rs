//! Mock jj executor for testing.
//!
//! `MockExecutor` implements [`JjExecutor`] without spawning anything. It
//! records every command it is asked to run and answers with scripted
//! output, keyed by the leading arguments of the command.
//!
//! # Example
//!
//! ```
//! use git_to_jj::jj::{JjCommand, JjExecutor, MockExecutor};
//!
//! let mock = MockExecutor::new();
//! mock.respond("operation show", "8d7a6c3b\n");
//!
//! let output = mock
//!     .execute(&JjCommand::captured(["operation", "show", "--no-op-diff"]))
//!     .unwrap();
//!
//! assert_eq!(output.stdout, "8d7a6c3b\n");
//! assert_eq!(mock.command_lines(), vec!["jj operation show --no-op-diff"]);
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::error::Result;

use super::command::{JjCommand, JjExecutor, JjOutput};

/// Mock executor that records calls and returns scripted output.
///
/// Commands with no scripted response succeed with empty output. When
/// several scripted prefixes match, the longest one wins.
#[derive(Debug, Default)]
pub struct MockExecutor {
    calls: RefCell<Vec<JjCommand>>,
    responses: RefCell<Vec<(String, JjOutput)>>,
}

impl MockExecutor {
    /// Create a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed with `stdout` for commands starting with `prefix`.
    ///
    /// `prefix` is matched against the space-joined arguments, so
    /// `"operation show"` matches `jj operation show --no-op-diff`.
    pub fn respond(&self, prefix: &str, stdout: &str) {
        self.script(
            prefix,
            JjOutput::success(stdout.to_string(), String::new(), Duration::ZERO),
        );
    }

    /// Fail with `exit_code` and `stderr` for commands starting with `prefix`.
    pub fn fail(&self, prefix: &str, exit_code: i32, stderr: &str) {
        self.script(
            prefix,
            JjOutput::failure(
                Some(exit_code),
                String::new(),
                stderr.to_string(),
                Duration::ZERO,
            ),
        );
    }

    fn script(&self, prefix: &str, output: JjOutput) {
        let mut responses = self.responses.borrow_mut();
        responses.retain(|(p, _)| p != prefix);
        responses.push((prefix.to_string(), output));
    }

    /// All commands executed so far, in order.
    pub fn calls(&self) -> Vec<JjCommand> {
        self.calls.borrow().clone()
    }

    /// All commands executed so far, rendered as `jj ...` lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }

    /// Check whether any executed command starts with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| matches_prefix(c, prefix))
    }

    /// Forget recorded calls, keeping scripted responses.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

fn matches_prefix(command: &JjCommand, prefix: &str) -> bool {
    let wanted: Vec<&str> = prefix.split_whitespace().collect();
    let args = command.arguments();
    args.len() >= wanted.len() && args.iter().zip(&wanted).all(|(a, w)| a == w)
}

impl JjExecutor for MockExecutor {
    fn execute(&self, command: &JjCommand) -> Result<JjOutput> {
        self.calls.borrow_mut().push(command.clone());

        let responses = self.responses.borrow();
        let scripted = responses
            .iter()
            .filter(|(prefix, _)| matches_prefix(command, prefix))
            .max_by_key(|(prefix, _)| prefix.split_whitespace().count())
            .map(|(_, output)| output.clone());

        Ok(scripted
            .unwrap_or_else(|| JjOutput::success(String::new(), String::new(), Duration::ZERO)))
    }
}
