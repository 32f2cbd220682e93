//! Commit command implementation.
//!
//! The `git-to-jj commit` command turns the index commit into a permanent
//! commit and slides a fresh, empty index in underneath the working copy.

use crate::cli::args::CommitArgs;
use crate::error::Result;
use crate::jj::{Jj, NewCommit, INDEX, INDEX_DESCRIPTION, WORKING_COPY};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Printed when the index commit is empty.
pub const NO_STAGED_CHANGES: &str = "There are no staged changes to commit";

/// The commit command implementation.
pub struct CommitCommand {
    args: CommitArgs,
}

impl CommitCommand {
    /// Create a new commit command.
    pub fn new(args: CommitArgs) -> Self {
        Self { args }
    }
}

impl Command for CommitCommand {
    fn execute(&self, jj: &Jj<'_>, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !jj.has_changes(ui, INDEX)? {
            ui.message(NO_STAGED_CHANGES);
            return Ok(CommandResult::success());
        }

        let message = self.args.message.as_deref().unwrap_or("");
        jj.describe(ui, Some(INDEX), message)?;

        // Not atomic with the describe above: an interruption here leaves
        // a described index with no placeholder above it.
        jj.new_commit(
            ui,
            NewCommit {
                message: INDEX_DESCRIPTION,
                insert_before: Some(WORKING_COPY),
                no_edit: true,
            },
        )?;

        tracing::info!("index committed, new index inserted");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jj::MockExecutor;
    use crate::ui::MockUI;

    fn message(msg: &str) -> CommitArgs {
        CommitArgs {
            message: Some(msg.to_string()),
        }
    }

    #[test]
    fn empty_index_is_a_noop() {
        let mock = MockExecutor::new();
        mock.respond("diff", "\n");
        let jj = Jj::new(&mock);
        let mut ui = MockUI::new();

        let result = CommitCommand::new(message("nothing"))
            .execute(&jj, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(mock.command_lines(), vec!["jj diff --revisions @-"]);
        assert!(ui.has_message(NO_STAGED_CHANGES));
    }

    #[test]
    fn staged_changes_become_a_commit() {
        let mock = MockExecutor::new();
        mock.respond("diff", "Added regular file hello.txt:\n        1: hi\n");
        let jj = Jj::new(&mock);
        let mut ui = MockUI::new();

        let result = CommitCommand::new(message("Add greeting"))
            .execute(&jj, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(
            mock.command_lines(),
            vec![
                "jj diff --revisions @-",
                "jj describe @- --message 'Add greeting'",
                "jj new --insert-before @ --message index --no-edit",
            ]
        );
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn missing_message_describes_with_empty_string() {
        let mock = MockExecutor::new();
        mock.respond("diff", "Modified regular file a.txt\n");
        let jj = Jj::new(&mock);
        let mut ui = MockUI::new();

        CommitCommand::new(CommitArgs::default())
            .execute(&jj, &mut ui)
            .unwrap();

        assert_eq!(
            mock.calls()[1].arguments(),
            ["describe", "@-", "--message", ""]
        );
    }

    #[test]
    fn describe_failure_skips_new_index() {
        let mock = MockExecutor::new();
        mock.respond("diff", "Modified regular file a.txt\n");
        mock.fail("describe", 1, "Error: Commit 000000000000 is immutable");
        let jj = Jj::new(&mock);
        let mut ui = MockUI::new();

        let result = CommitCommand::new(message("x")).execute(&jj, &mut ui);

        assert!(result.is_err());
        assert!(!mock.ran("new"));
    }
}
