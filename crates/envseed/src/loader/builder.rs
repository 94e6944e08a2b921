//! Loader builder and merge pass.
//!
//! Responsibilities:
//! - Provide the builder-pattern `Loader` over a source name, an injected
//!   reader, and a malformed-line policy.
//! - Run the single merge pass that applies entries to an `EnvStore`.
//!
//! Does NOT handle:
//! - Line grammar (delegated to parse.rs).
//! - Source resolution (delegated to the injected `SourceReader`).
//!
//! Invariants / Assumptions:
//! - Existing store keys always win over source entries.
//! - Under `MalformedLinePolicy::Error`, nothing is merged from a source
//!   that contains any malformed line.
//! - The reader returns the whole source before parsing begins, so a failed
//!   load never leaves the store partially merged.

use crate::constants::DEFAULT_ENV_FILE;
use crate::parse::{self, Line, MalformedKind};
use crate::source::{FsSource, SourceError, SourceReader};
use crate::store::EnvStore;

use super::error::LoadError;
use super::report::{LoadReport, LoadStatus};

/// How to treat lines the permissive grammar cannot use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Silently skip malformed lines.
    #[default]
    Skip,
    /// Reject the whole source before merging anything.
    Error,
}

/// Loader that merges default values from a `KEY=VALUE` source into an
/// environment store.
///
/// Keys already present in the store are never overwritten, so explicit
/// environment variables, command-line overrides, and earlier loads take
/// precedence over the source.
#[derive(Debug, Clone)]
pub struct Loader<R = FsSource> {
    source: String,
    policy: MalformedLinePolicy,
    reader: R,
}

impl Loader<FsSource> {
    /// Create a loader for `.env` in the current directory.
    pub fn new() -> Self {
        Self {
            source: DEFAULT_ENV_FILE.to_string(),
            policy: MalformedLinePolicy::Skip,
            reader: FsSource,
        }
    }
}

impl Default for Loader<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SourceReader> Loader<R> {
    /// Set the source identifier to load from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the malformed-line policy.
    pub fn with_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the source reader (primarily for testing and embedding).
    pub fn with_reader<R2: SourceReader>(self, reader: R2) -> Loader<R2> {
        Loader {
            source: self.source,
            policy: self.policy,
            reader,
        }
    }

    /// The configured source identifier.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Load the source and merge its entries into `store`.
    ///
    /// A missing source is an expected outcome and returns
    /// `Ok(LoadStatus::SourceNotFound)` with the store untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source exists but cannot be read (`LoadError::SourceIo`):
    ///   permission denied, invalid UTF-8 content, and so on.
    /// - The source contains a malformed line and the policy is
    ///   `MalformedLinePolicy::Error` (`LoadError::MalformedLine`).
    ///
    /// On any error the store is left exactly as it was.
    pub fn load(&self, store: &mut dyn EnvStore) -> Result<LoadStatus, LoadError> {
        let text = match self.reader.read(&self.source) {
            Ok(text) => text,
            Err(SourceError::NotFound) => {
                tracing::debug!(
                    source = %self.source,
                    "Configuration source not found; nothing merged"
                );
                return Ok(LoadStatus::SourceNotFound);
            }
            Err(SourceError::Io { kind }) => {
                return Err(LoadError::SourceIo {
                    source_name: self.source.clone(),
                    kind,
                });
            }
        };

        if self.policy == MalformedLinePolicy::Error
            && let Some((line, kind)) = first_malformed(&text)
        {
            return Err(LoadError::MalformedLine {
                source_name: self.source.clone(),
                line,
                kind,
            });
        }

        let mut report = LoadReport::default();
        for raw in text.lines() {
            match parse::classify(raw) {
                Line::Blank | Line::Comment => report.ignored += 1,
                Line::Malformed(_) => report.skipped_malformed += 1,
                Line::Entry { key, value } => {
                    if store.contains(key) {
                        report.skipped_existing += 1;
                    } else {
                        store.set(key, value);
                        report.applied += 1;
                    }
                }
            }
        }

        tracing::debug!(
            source = %self.source,
            applied = report.applied,
            skipped_existing = report.skipped_existing,
            skipped_malformed = report.skipped_malformed,
            "Merged environment defaults"
        );
        Ok(LoadStatus::Loaded(report))
    }
}

/// 1-based line number and kind of the first malformed line, if any.
fn first_malformed(text: &str) -> Option<(usize, MalformedKind)> {
    text.lines()
        .enumerate()
        .find_map(|(idx, raw)| match parse::classify(raw) {
            Line::Malformed(kind) => Some((idx + 1, kind)),
            _ => None,
        })
}
