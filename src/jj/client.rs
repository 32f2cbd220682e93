//! Typed jj operations.
//!
//! [`Jj`] wraps a [`JjExecutor`] and exposes one method per jj call the
//! porcelain commands need. Every call is echoed through the UI before it
//! runs, and a non-zero exit becomes [`GitToJjError::DelegateFailed`].

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{GitToJjError, Result};
use crate::ui::UserInterface;

use super::command::{JjCommand, JjExecutor, JjOutput};

/// Revset for the working-copy commit.
pub const WORKING_COPY: &str = "@";

/// Revset for the index commit, the parent of the working copy.
pub const INDEX: &str = "@-";

/// Placeholder description of the index commit.
pub const INDEX_DESCRIPTION: &str = "index";

/// Description of the working-copy commit.
pub const WORKING_TREE_DESCRIPTION: &str = "working tree";

/// An entry in jj's operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationId(String);

impl OperationId {
    /// Parse the output of `jj operation show --template self.id()`.
    pub fn parse(output: &str) -> Option<Self> {
        let id = output.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options for `jj new`.
#[derive(Debug, Clone, Default)]
pub struct NewCommit<'m> {
    /// Description for the new commit.
    pub message: &'m str,
    /// Insert the new commit before this revision instead of on top of `@`.
    pub insert_before: Option<&'m str>,
    /// Leave the working copy where it is.
    pub no_edit: bool,
}

/// Client for the jj command-line interface.
#[derive(Clone)]
pub struct Jj<'a> {
    executor: &'a dyn JjExecutor,
    cwd: Option<PathBuf>,
}

impl<'a> Jj<'a> {
    /// Create a client that runs every call through `executor`.
    pub fn new(executor: &'a dyn JjExecutor) -> Self {
        Self {
            executor,
            cwd: None,
        }
    }

    /// A client whose calls run inside `dir`.
    ///
    /// Relative paths nest inside any directory already set.
    pub fn in_dir(&self, dir: impl AsRef<Path>) -> Self {
        let cwd = match &self.cwd {
            Some(current) => current.join(dir),
            None => dir.as_ref().to_path_buf(),
        };

        Self {
            executor: self.executor,
            cwd: Some(cwd),
        }
    }

    /// Run a command, failing if jj exits unsuccessfully.
    pub fn run(&self, ui: &mut dyn UserInterface, command: JjCommand) -> Result<JjOutput> {
        let command = match &self.cwd {
            Some(dir) => command.current_dir(dir),
            None => command,
        };

        ui.command(&command.to_string());
        let output = self.executor.execute(&command)?;

        tracing::debug!(
            command = %command,
            exit_code = ?output.exit_code,
            duration_ms = output.duration.as_millis() as u64,
            "jj finished"
        );

        if output.success {
            Ok(output)
        } else {
            Err(GitToJjError::DelegateFailed {
                command: command.to_string(),
                code: output.exit_code,
                stderr: output.stderr,
            })
        }
    }

    /// `jj git init --no-colocate [-- directory]`
    pub fn git_init(&self, ui: &mut dyn UserInterface, directory: Option<&Path>) -> Result<()> {
        let mut command = JjCommand::new(["git", "init", "--no-colocate"]);
        if let Some(dir) = directory {
            command = command.arg("--").arg(dir.to_string_lossy());
        }
        self.run(ui, command)?;
        Ok(())
    }

    /// `jj bookmark create --revision @ -- <name>`
    pub fn bookmark_create(&self, ui: &mut dyn UserInterface, name: &str) -> Result<()> {
        let command = JjCommand::new([
            "bookmark",
            "create",
            "--revision",
            WORKING_COPY,
            "--",
            name,
        ]);
        self.run(ui, command)?;
        Ok(())
    }

    /// `jj bookmark delete -- <name>`
    pub fn bookmark_delete(&self, ui: &mut dyn UserInterface, name: &str) -> Result<()> {
        self.run(ui, JjCommand::new(["bookmark", "delete", "--", name]))?;
        Ok(())
    }

    /// `jj bookmark list`, printed straight to the terminal.
    pub fn bookmark_list(&self, ui: &mut dyn UserInterface) -> Result<()> {
        self.run(ui, JjCommand::new(["bookmark", "list"]))?;
        Ok(())
    }

    /// `jj describe [revision] --message <message>`
    pub fn describe(
        &self,
        ui: &mut dyn UserInterface,
        revision: Option<&str>,
        message: &str,
    ) -> Result<()> {
        let command = JjCommand::new(["describe"])
            .args(revision)
            .args(["--message", message]);
        self.run(ui, command)?;
        Ok(())
    }

    /// `jj new [--insert-before <rev>] --message <message> [--no-edit]`
    pub fn new_commit(&self, ui: &mut dyn UserInterface, options: NewCommit<'_>) -> Result<()> {
        let mut command = JjCommand::new(["new"]);
        if let Some(rev) = options.insert_before {
            command = command.args(["--insert-before", rev]);
        }
        command = command.args(["--message", options.message]);
        if options.no_edit {
            command = command.arg("--no-edit");
        }
        self.run(ui, command)?;
        Ok(())
    }

    /// `jj squash --keep-emptied [-- paths...]`
    ///
    /// Paths follow `--` so names starting with `-` are never read as flags.
    pub fn squash_keep_emptied(&self, ui: &mut dyn UserInterface, paths: &[String]) -> Result<()> {
        let mut command = JjCommand::new(["squash", "--keep-emptied"]);
        if !paths.is_empty() {
            command = command.arg("--").args(paths.iter().cloned());
        }
        self.run(ui, command)?;
        Ok(())
    }

    /// `jj diff --revisions <revision>`, captured.
    pub fn diff(&self, ui: &mut dyn UserInterface, revision: &str) -> Result<String> {
        let output = self.run(ui, JjCommand::captured(["diff", "--revisions", revision]))?;
        Ok(output.stdout)
    }

    /// Whether `revision` changes anything relative to its parent.
    pub fn has_changes(&self, ui: &mut dyn UserInterface, revision: &str) -> Result<bool> {
        Ok(!self.diff(ui, revision)?.trim().is_empty())
    }

    /// `jj rebase --source <source> --destination <destination>`
    pub fn rebase(
        &self,
        ui: &mut dyn UserInterface,
        source: &str,
        destination: &str,
    ) -> Result<()> {
        let command = JjCommand::new(["rebase", "--source", source, "--destination", destination]);
        self.run(ui, command)?;
        Ok(())
    }

    /// The id of the latest operation in jj's operation log.
    pub fn current_operation(&self, ui: &mut dyn UserInterface) -> Result<OperationId> {
        let command =
            JjCommand::captured(["operation", "show", "--template", "self.id()", "--no-op-diff"]);
        let output = self.run(ui, command)?;

        OperationId::parse(&output.stdout).ok_or_else(|| {
            anyhow::anyhow!(
                "jj did not report an operation id (got {:?})",
                output.stdout.trim()
            )
            .into()
        })
    }

    /// Whether `revision` contains a conflict.
    pub fn is_conflicted(&self, ui: &mut dyn UserInterface, revision: &str) -> Result<bool> {
        let command = JjCommand::captured([
            "log",
            "--revisions",
            revision,
            "--template",
            "self.conflict()",
            "--no-graph",
        ]);
        let output = self.run(ui, command)?;
        let flag = output.stdout.trim();

        if flag != "true" && flag != "false" {
            tracing::warn!(revision, output = flag, "unexpected conflict flag from jj");
        }

        Ok(flag == "true")
    }

    /// `jj operation restore <id>`
    pub fn operation_restore(
        &self,
        ui: &mut dyn UserInterface,
        operation: &OperationId,
    ) -> Result<()> {
        self.run(
            ui,
            JjCommand::new(["operation", "restore", operation.as_str()]),
        )?;
        Ok(())
    }
}
