//! Environment store abstraction.
//!
//! Responsibilities:
//! - Define the `EnvStore` trait the loader merges defaults into.
//! - Provide `ProcessEnv` (the real process environment) and `MemoryStore`
//!   (an isolated in-memory store for tests and embedding).
//! - Provide `env_var_or_none` for reading optional process variables.
//!
//! Does NOT handle:
//! - Reading configuration sources (see source.rs).
//! - Merge order and precedence (see loader/builder.rs).
//!
//! Invariants:
//! - `ProcessEnv::set` requires the single-writer, pre-concurrency usage
//!   documented on the type: the environment is seeded before any threads
//!   that read or write it exist.
//! - Empty or whitespace-only process variables are treated as unset by
//!   `env_var_or_none`, and returned values are trimmed.

use std::collections::HashMap;

/// Mutable key/value environment store that loads merge into.
///
/// The loader only ever inserts keys that are absent, so implementations do
/// not need to guard against overwrites themselves.
pub trait EnvStore {
    /// Whether `key` is currently set.
    fn contains(&self, key: &str) -> bool;

    /// Current value for `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`.
    fn set(&mut self, key: &str, value: &str);
}

/// The real process environment.
///
/// Seeding must happen before any threads that touch the environment are
/// spawned: mutating the process environment is unsafe in the presence of
/// concurrent readers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn contains(&self, key: &str) -> bool {
        // var_os so that a variable holding non-UTF-8 still counts as set.
        std::env::var_os(key).is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: this type's contract is single-threaded, pre-concurrency
        // seeding; no other thread touches the environment during the call.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// In-memory store for tests and for embedding the loader without mutating
/// real process state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, as the host process would before a load runs.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Number of keys currently set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl EnvStore for MemoryStore {
    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Read a process environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // Already trimmed, keep the original allocation.
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}
