//! Environment-default ingestion.
//!
//! This crate reads line-oriented `KEY=VALUE` sources (`.env` files by
//! convention) and merges them into an environment store without overwriting
//! keys that are already set, so explicit environment variables and earlier
//! loads always win. Loading is a single synchronous pass intended to run
//! once, near process start, before concurrent work begins.
//!
//! The grammar is deliberately permissive: blank lines and `#` comments are
//! ignored, lines without `=` and lines with an empty key are skipped, and a
//! value keeps everything after the first `=` verbatim (no quoting or escape
//! syntax).

pub mod constants;
mod loader;
pub mod parse;
pub mod source;
pub mod store;

pub use loader::{LoadError, LoadReport, LoadStatus, Loader, MalformedLinePolicy};
pub use source::{FsSource, SourceError, SourceReader};
pub use store::{EnvStore, MemoryStore, ProcessEnv, env_var_or_none};

use constants::SEED_DISABLED_VAR;

/// Check if seeding is disabled via environment variable.
fn seeding_disabled() -> bool {
    matches!(
        std::env::var(SEED_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Merge defaults from `.env` in the current directory into the process
/// environment.
///
/// Returns `true` if the file was found and merged. See [`seed_from`] for the
/// full contract.
pub fn seed() -> bool {
    seed_from(constants::DEFAULT_ENV_FILE)
}

/// Merge defaults from `source` into the process environment.
///
/// Returns `true` if the source was found and merged, `false` if it does not
/// exist. Read failures other than "not found" are logged at `warn` (source
/// name and error kind only) and also yield `false`; callers that need to
/// observe them as errors use [`Loader::load`] directly.
///
/// If the `ENVSEED_DISABLED` environment variable is set to "true" or "1",
/// nothing is loaded and `false` is returned (useful for test processes that
/// must not pick up an ambient `.env` file).
///
/// Must be called before spawning threads that touch the process environment;
/// see [`ProcessEnv`].
pub fn seed_from(source: &str) -> bool {
    if seeding_disabled() {
        return false;
    }

    match Loader::new().with_source(source).load(&mut ProcessEnv) {
        Ok(status) => status.is_loaded(),
        Err(e) => {
            tracing::warn!(source = %source, error = %e, "Could not load environment defaults");
            false
        }
    }
}
