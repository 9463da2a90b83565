//! Test utilities for speakeasy-helpers.
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite.
//!
//! # Example
//!
//! ```rust,ignore
//! use speakeasy_helpers::test_utils::{GEN_LOCK_FIXTURE, SpeakeasyFixture};
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let project = SpeakeasyFixture::new(temp.path());
//! project.write_gen_lock(GEN_LOCK_FIXTURE).unwrap();
//! assert!(project.gen_lock_path().exists());
//! ```

pub mod fixtures;

pub use fixtures::{
    ARAZZO_FIXTURE, ARAZZO_MALFORMED_ENTRIES_FIXTURE, ARAZZO_THREE_WORKFLOWS_FIXTURE,
    GEN_LOCK_FIXTURE, GEN_LOCK_WITH_MANAGEMENT_FIXTURE, SpeakeasyFixture,
};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `Some(level)` that level is used;
/// with `None` logging stays off unless `RUST_LOG` is set.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
