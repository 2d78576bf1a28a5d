//! Test utilities for fid-umd
//!
//! Shared by the unit tests and, through the `test-utils` feature, by the
//! integration suite.
//!
//! - [`init_test_logging`] - Route `tracing` output into the test harness
//! - [`SourceFixture`] - Sample JavaScript inputs
//! - [`TestProject`] - Temporary directory holding source files
//!
//! # Example
//!
//! ```rust,no_run
//! use fid_umd::test_utils::{SourceFixture, TestProject};
//!
//! let project = TestProject::new().unwrap();
//! let path = project.write_fixture(&SourceFixture::plain_body()).unwrap();
//! assert!(path.exists());
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestProject;
pub use fixtures::SourceFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`. Does nothing when neither
/// is set. Only the first call in a test binary has any effect.
///
/// ```bash
/// RUST_LOG=fid_umd=debug cargo test
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
            .try_init();
    });
}
