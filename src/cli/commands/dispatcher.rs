//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::GitToJjConfig;
use crate::error::Result;
use crate::jj::Jj;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `jj` - Client used for every call into jj
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, jj: &Jj<'_>, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    jj: Jj<'a>,
    config: GitToJjConfig,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher around a jj client.
    pub fn new(jj: Jj<'a>, config: GitToJjConfig) -> Self {
        Self { jj, config }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &GitToJjConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Init(args) => {
                let cmd =
                    super::init::InitCommand::new(args.clone(), &self.config.default_bookmark);
                cmd.execute(&self.jj, ui)
            }
            Commands::Add(args) => {
                let cmd = super::add::AddCommand::new(args.clone());
                cmd.execute(&self.jj, ui)
            }
            Commands::Commit(args) => {
                let cmd = super::commit::CommitCommand::new(args.clone());
                cmd.execute(&self.jj, ui)
            }
            Commands::Branch(args) => {
                let cmd = super::branch::BranchCommand::new(args.clone());
                cmd.execute(&self.jj, ui)
            }
            Commands::Switch(args) => {
                let cmd = super::switch::SwitchCommand::new(args.clone());
                cmd.execute(&self.jj, ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(&self.jj, ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jj::MockExecutor;
    use crate::ui::MockUI;
    use clap::Parser;

    fn dispatch(mock: &MockExecutor, args: &[&str]) -> Result<CommandResult> {
        let cli = Cli::parse_from(std::iter::once("git-to-jj").chain(args.iter().copied()));
        let dispatcher = CommandDispatcher::new(Jj::new(mock), GitToJjConfig::default());
        let mut ui = MockUI::new();
        dispatcher.dispatch(&cli, &mut ui)
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn routes_each_subcommand() {
        let mock = MockExecutor::new();
        dispatch(&mock, &["add", "a.txt"]).unwrap();
        assert!(mock.ran("squash --keep-emptied -- a.txt"));

        let mock = MockExecutor::new();
        dispatch(&mock, &["branch"]).unwrap();
        assert_eq!(mock.command_lines(), vec!["jj bookmark list"]);

        let mock = MockExecutor::new();
        mock.respond("operation show", "abc");
        dispatch(&mock, &["switch", "main"]).unwrap();
        assert!(mock.ran("rebase --source @- --destination main"));
    }

    #[test]
    fn init_uses_configured_bookmark() {
        let mock = MockExecutor::new();
        let cli = Cli::parse_from(["git-to-jj", "init"]);
        let config = GitToJjConfig {
            default_bookmark: "trunk".to_string(),
            ..Default::default()
        };
        let dispatcher = CommandDispatcher::new(Jj::new(&mock), config);
        let mut ui = MockUI::new();

        dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(mock.ran("bookmark create --revision @ -- trunk"));
        assert_eq!(dispatcher.config().default_bookmark, "trunk");
    }

    #[test]
    fn delegate_failure_propagates() {
        let mock = MockExecutor::new();
        mock.fail("squash", 1, "Error: There is no jj repo in \".\"");

        let err = dispatch(&mock, &["add"]).unwrap_err();

        assert!(err.to_string().contains("jj squash --keep-emptied"));
    }
}
