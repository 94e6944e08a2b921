//! Centralized constants for the envseed workspace.
//!
//! This module contains defaults used across modules to avoid magic literal
//! duplication and improve maintainability.

/// Default configuration source name, resolved relative to the current
/// working directory by [`crate::FsSource`].
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment variable that disables [`crate::seed`] and
/// [`crate::seed_from`] when set to "true" or "1".
pub const SEED_DISABLED_VAR: &str = "ENVSEED_DISABLED";

/// Lines whose first non-whitespace character is this are comments.
pub const COMMENT_CHAR: char = '#';

/// Key/value separator. Only the first occurrence splits the line.
pub const SEPARATOR: char = '=';
