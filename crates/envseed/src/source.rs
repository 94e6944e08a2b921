//! Configuration-source reading.
//!
//! Responsibilities:
//! - Define the `SourceReader` capability the loader reads through.
//! - Provide `FsSource`, the filesystem-backed reader.
//! - Distinguish "source not found" from every other read failure.
//!
//! Does NOT handle:
//! - Line grammar (see parse.rs) or merging (see loader/builder.rs).
//!
//! Invariants:
//! - Error values never carry source contents, only the failure kind.

use std::io::ErrorKind;

use thiserror::Error;

/// Why a configuration source could not be read.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The named source does not exist. Expected during normal startup; the
    /// loader reports it as a status, not a fault.
    #[error("source not found")]
    NotFound,

    /// Any other read failure (permission denied, invalid UTF-8 content, ...).
    #[error("failed to read source: {kind}")]
    Io { kind: ErrorKind },
}

/// Capability to resolve a source identifier to its full text.
///
/// Reading returns the whole source at once, so a failure can never leave a
/// load half-applied.
pub trait SourceReader {
    /// Read the entire source named by `name` as UTF-8 text.
    fn read(&self, name: &str) -> Result<String, SourceError>;
}

/// Filesystem-backed reader: the source identifier is a path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl SourceReader for FsSource {
    fn read(&self, name: &str) -> Result<String, SourceError> {
        std::fs::read_to_string(name).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound,
            kind => SourceError::Io { kind },
        })
    }
}
