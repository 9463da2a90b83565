//! speakeasy-helpers - utilities for Speakeasy generated API clients.
//!
//! Speakeasy keeps two sibling artifacts under `.speakeasy/` when it generates
//! tests: `gen.lock`, recording which operations already have a generated test,
//! and `test.arazzo.yaml`, holding one Arazzo workflow per test. Deleting an
//! operation from both makes the next `speakeasy run` regenerate its test from
//! scratch.
//!
//! # Modules
//!
//! - [`cli`] - command-line parsing and the `reset-tests` command
//! - [`lockfile`] - reading, pruning and rewriting `gen.lock`
//! - [`arazzo`] - reading, pruning and rewriting `test.arazzo.yaml`
//! - [`core`] - errors, the operation ID set and prune outcomes
//! - [`utils`] - atomic file writes and YAML helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use speakeasy_helpers::core::OperationIdSet;
//! use speakeasy_helpers::{arazzo, lockfile};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let ids = OperationIdSet::new(["activity", "feedback"])?;
//! let lock = lockfile::prune_gen_lock(Path::new(".speakeasy/gen.lock"), &ids)?;
//! let workflows = arazzo::prune_arazzo(Path::new(".speakeasy/test.arazzo.yaml"), &ids)?;
//! println!("removed {} + {}", lock.removed(), workflows.removed());
//! # Ok(())
//! # }
//! ```

pub mod arazzo;
pub mod cli;
pub mod constants;
pub mod core;
pub mod lockfile;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
