//! Error types for environment loading.
//!
//! Responsibilities:
//! - Define error variants for load failures.
//!
//! Does NOT handle:
//! - The "source not found" outcome, which is a `LoadStatus`, not an error.
//!
//! Invariants:
//! - Error messages never include raw source line contents; only source
//!   names, line numbers, and failure kinds. Values in `.env` files are
//!   routinely secrets.

use std::io::ErrorKind;

use thiserror::Error;

use crate::parse::MalformedKind;

/// Errors that can occur while loading a configuration source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source exists but could not be read.
    #[error("failed to read {source_name}: {kind}")]
    SourceIo {
        source_name: String,
        kind: ErrorKind,
    },

    /// A line the grammar cannot use, under `MalformedLinePolicy::Error`.
    ///
    /// Carries the 1-based line number only, never the line itself.
    #[error("malformed line in {source_name} at line {line}: {kind}")]
    MalformedLine {
        source_name: String,
        line: usize,
        kind: MalformedKind,
    },
}
