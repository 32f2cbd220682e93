//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, Theme, UserInterface};

/// Terminal UI implementation.
///
/// Messages go to stdout. Errors and echoed commands go to
/// stderr so that pass-through jj output on stdout stays clean.
pub struct TerminalUI {
    stdout: Term,
    stderr: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: Theme) -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.stdout, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.theme.format_error(msg)).ok();
    }

    fn command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            writeln!(self.stderr, "{}", self.theme.format_command(command)).ok();
        }
    }
}

/// Create the UI for the given mode, honouring `--no-color`.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_theme(mode, Theme::plain()))
    } else {
        Box::new(TerminalUI::new(mode))
    }
}
