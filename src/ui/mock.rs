//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use git_to_jj::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.command("jj bookmark list");
//! ui.message("There are no staged changes to commit");
//!
//! // Assert on captured interactions
//! assert_eq!(ui.commands(), &["jj bookmark list"]);
//! assert!(ui.has_message("no staged changes"));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
///
/// Echoed commands are always captured; output mode only matters to
/// [`TerminalUI`](super::TerminalUI).
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all echoed commands.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.errors.clear();
        self.commands.clear();
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.error("Oops");
        ui.command("jj new");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.commands(), &["jj new"]);
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();
        ui.message("There are no staged changes to commit");
        ui.error("Please commit your changes");

        assert!(ui.has_message("no staged changes"));
        assert!(ui.has_error("commit your changes"));
        assert!(!ui.has_error("stash"));
    }

    #[test]
    fn mock_ui_clear_resets() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.command("jj bookmark list");

        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.commands().is_empty());
    }
}
