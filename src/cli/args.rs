//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Git porcelain commands implemented as Jujutsu operations.
#[derive(Debug, Parser)]
#[command(name = "git-to-jj")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Path to config file (overrides .git-to-jj.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// jj executable to delegate to
    #[arg(long, global = true, env = "GIT_TO_JJ_JJ", value_name = "PROGRAM")]
    pub jj: Option<String>,

    /// Do not echo jj commands
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an empty repository
    Init(InitArgs),

    /// Add file contents to the index
    Add(AddArgs),

    /// Record changes to the repository
    Commit(CommitArgs),

    /// List, create, or delete branches
    Branch(BranchArgs),

    /// Switch branches
    Switch(SwitchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Directory to create the repository in
    pub directory: Option<PathBuf>,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Files to add content from
    #[arg(value_name = "PATHSPEC")]
    pub pathspecs: Vec<String>,
}

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CommitArgs {
    /// Use the given message as the commit message
    #[arg(short, long, value_name = "MSG")]
    pub message: Option<String>,
}

/// Arguments for the `branch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BranchArgs {
    /// The name of the branch to create
    #[arg(value_name = "BRANCHNAME")]
    pub name: Option<String>,

    /// Delete the given branch
    #[arg(short, long, value_name = "BRANCHNAME")]
    pub delete: Option<String>,
}

/// Arguments for the `switch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SwitchArgs {
    /// The branch to switch to
    pub branch: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
