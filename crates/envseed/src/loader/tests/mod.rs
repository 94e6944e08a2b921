//! Tests for the environment loader.
//!
//! Responsibilities:
//! - Test merge behavior, reports, and precedence against `MemoryStore`.
//! - Test malformed-line policies.
//! - Test seeding the real process environment.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and
//!   `env_lock()` to prevent cross-test contamination.
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

use crate::source::{SourceError, SourceReader};

pub mod load_tests;
pub mod policy_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Reader that serves fixed text for any source name.
pub struct StaticSource(pub &'static str);

impl SourceReader for StaticSource {
    fn read(&self, _name: &str) -> Result<String, SourceError> {
        Ok(self.0.to_string())
    }
}

/// Reader that always fails with the given error.
pub struct FailingSource(pub SourceError);

impl SourceReader for FailingSource {
    fn read(&self, _name: &str) -> Result<String, SourceError> {
        Err(self.0)
    }
}
