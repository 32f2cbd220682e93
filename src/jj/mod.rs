//! Delegation to the Jujutsu (`jj`) command-line interface.
//!
//! - [`command`] - building and running individual jj calls
//! - [`client`] - typed operations used by the porcelain commands
//! - [`mock`] - a scripted executor for tests

pub mod client;
pub mod command;
pub mod mock;

pub use client::{
    Jj, NewCommit, OperationId, INDEX, INDEX_DESCRIPTION, WORKING_COPY, WORKING_TREE_DESCRIPTION,
};
pub use command::{JjCommand, JjExecutor, JjOutput, ProcessExecutor};
pub use mock::MockExecutor;
