//! Branch command implementation.
//!
//! Branches map onto jj bookmarks. A positional name creates one, `-d`
//! deletes one, and no arguments lists them all.

use crate::cli::args::BranchArgs;
use crate::error::Result;
use crate::jj::Jj;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The branch command implementation.
pub struct BranchCommand {
    args: BranchArgs,
}

impl BranchCommand {
    /// Create a new branch command.
    pub fn new(args: BranchArgs) -> Self {
        Self { args }
    }
}

impl Command for BranchCommand {
    fn execute(&self, jj: &Jj<'_>, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(name) = &self.args.name {
            jj.bookmark_create(ui, name)?;
        } else if let Some(name) = &self.args.delete {
            jj.bookmark_delete(ui, name)?;
        } else {
            jj.bookmark_list(ui)?;
        }

        Ok(CommandResult::success())
    }
}
