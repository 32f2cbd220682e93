//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command talks to jj through
//! the [`Jj`](crate::jj::Jj) client it is handed, never by spawning
//! processes itself.

pub mod add;
pub mod branch;
pub mod commit;
pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod switch;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
