//! git-to-jj - Git porcelain commands backed by Jujutsu.
//!
//! `git-to-jj` accepts familiar git commands (`init`, `add`, `commit`,
//! `branch`, `switch`) and carries each one out as a short sequence of `jj`
//! calls. A dedicated "index" commit below the working-copy commit plays the
//! role of git's staging area.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing and porcelain commands
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`jj`] - Building, running, and mocking `jj` invocations
//! - [`ui`] - Terminal output and command echo
//!
//! # Example
//!
//! ```
//! use git_to_jj::jj::{Jj, MockExecutor};
//! use git_to_jj::ui::MockUI;
//!
//! let mock = MockExecutor::new();
//! mock.respond("diff", "");
//! let jj = Jj::new(&mock);
//! let mut ui = MockUI::new();
//!
//! assert!(!jj.has_changes(&mut ui, "@-").unwrap());
//! assert_eq!(mock.command_lines(), vec!["jj diff --revisions @-"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod jj;
pub mod ui;

pub use error::{GitToJjError, Result};
