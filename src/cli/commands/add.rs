//! Add command implementation.
//!
//! `git-to-jj add` moves changes out of the working-copy commit and into
//! the index commit below it.

use crate::cli::args::AddArgs;
use crate::error::Result;
use crate::jj::Jj;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(args: AddArgs) -> Self {
        Self { args }
    }
}

impl Command for AddCommand {
    fn execute(&self, jj: &Jj<'_>, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // --keep-emptied stops jj from abandoning the working-copy commit
        // once everything in it has been squashed.
        jj.squash_keep_emptied(ui, &self.args.pathspecs)?;
        Ok(CommandResult::success())
    }
}
