//! Default-environment loader.
//!
//! Responsibilities:
//! - Merge parsed entries from a configuration source into an `EnvStore`.
//! - Preserve the precedence invariant: existing keys are never overwritten.
//! - Expose the malformed-line policy at the call site.
//!
//! Does NOT handle:
//! - Source resolution (see source.rs) or line grammar (see parse.rs).
//!
//! Invariants / Assumptions:
//! - A failed load never leaves the store partially merged.
//! - A missing source is an expected outcome, not an error.
//! - Errors and logs never include source line contents.

mod builder;
mod error;
mod report;

pub use builder::{Loader, MalformedLinePolicy};
pub use error::LoadError;
pub use report::{LoadReport, LoadStatus};

#[cfg(test)]
mod tests;
