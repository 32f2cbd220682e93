//! Switch command implementation.
//!
//! `git-to-jj switch <branch>` rebases the index and working-copy commits
//! onto the target branch. The operation log entry from before the rebase
//! is kept so a conflicted result can be rolled back completely.
//!
//! There is no "local changes would be overwritten" check. The conflict
//! check after the rebase is the only guard.

use crate::cli::args::SwitchArgs;
use crate::error::{GitToJjError, Result};
use crate::jj::{Jj, INDEX, WORKING_COPY};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The switch command implementation.
pub struct SwitchCommand {
    args: SwitchArgs,
}

impl SwitchCommand {
    /// Create a new switch command.
    pub fn new(args: SwitchArgs) -> Self {
        Self { args }
    }
}

impl Command for SwitchCommand {
    fn execute(&self, jj: &Jj<'_>, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let branch = &self.args.branch;
        let checkpoint = jj.current_operation(ui)?;

        jj.rebase(ui, INDEX, branch)?;

        // The working copy descends from the index, so a conflict in either
        // shows up on @.
        if jj.is_conflicted(ui, WORKING_COPY)? {
            tracing::info!(%branch, operation = %checkpoint, "switch conflicted, restoring");
            jj.operation_restore(ui, &checkpoint)?;
            return Err(GitToJjError::SwitchConflict {
                branch: branch.clone(),
            });
        }

        tracing::info!(%branch, "switched");
        Ok(CommandResult::success())
    }
}
