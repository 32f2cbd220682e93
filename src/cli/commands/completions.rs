//! Shell completions generation.
//!
//! The `git-to-jj completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::jj::Jj;
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

const BIN_NAME: &str = "git-to-jj";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    fn write_to(&self, out: &mut dyn std::io::Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, out);
    }
}

impl Command for CompletionsCommand {
    fn execute(
        &self,
        _jj: &Jj<'_>,
        _ui: &mut dyn UserInterface,
    ) -> crate::error::Result<CommandResult> {
        self.write_to(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jj::MockExecutor;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    fn generate(shell: Shell) -> String {
        let mut buf = Vec::new();
        CompletionsCommand::new(CompletionsArgs { shell }).write_to(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generates_bash_completions() {
        let output = generate(Shell::Bash);
        assert!(output.contains("git-to-jj"));
        assert!(output.contains("complete"));
        assert!(output.contains("switch"));
    }

    #[test]
    fn generates_zsh_completions() {
        let output = generate(Shell::Zsh);
        assert!(output.contains("git-to-jj"));
    }

    #[test]
    fn generates_fish_completions() {
        let output = generate(Shell::Fish);
        assert!(output.contains("git-to-jj"));
    }

    #[test]
    fn never_calls_jj() {
        let mock = MockExecutor::new();
        let mut ui = MockUI::new();
        CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash })
            .execute(&Jj::new(&mock), &mut ui)
            .unwrap();
        assert!(mock.calls().is_empty());
    }
}
