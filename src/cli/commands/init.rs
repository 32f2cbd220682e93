//! Init command implementation.
//!
//! The `git-to-jj init` command creates a jj repository laid out in the
//! two-commit "index + working tree" shape the other commands expect:
//!
//! ```text
//! @  working tree
//! ○  index        (bookmark: main)
//! ◆  root
//! ```

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::jj::{Jj, NewCommit, INDEX_DESCRIPTION, WORKING_TREE_DESCRIPTION};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    args: InitArgs,
    bookmark: String,
}

impl InitCommand {
    /// Create a new init command that creates `bookmark` as the first branch.
    pub fn new(args: InitArgs, bookmark: &str) -> Self {
        Self {
            args,
            bookmark: bookmark.to_string(),
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, jj: &Jj<'_>, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let directory = self.args.directory.as_deref();
        jj.git_init(ui, directory)?;

        // Everything after `git init` has to run inside the new repository.
        let repo = match directory {
            Some(dir) => jj.in_dir(dir),
            None => jj.clone(),
        };

        repo.bookmark_create(ui, &self.bookmark)?;
        repo.describe(ui, None, INDEX_DESCRIPTION)?;
        repo.new_commit(
            ui,
            NewCommit {
                message: WORKING_TREE_DESCRIPTION,
                ..Default::default()
            },
        )?;

        tracing::info!(bookmark = %self.bookmark, "initialized index and working tree");
        Ok(CommandResult::success())
    }
}
