//! Malformed-line policy tests.
//!
//! Responsibilities:
//! - Test that `Skip` is the default policy.
//! - Test that `Error` rejects the source atomically with a line number.
//! - Test that policy errors never leak source line contents.

use super::StaticSource;
use crate::loader::builder::{Loader, MalformedLinePolicy};
use crate::loader::error::LoadError;
use crate::parse::MalformedKind;
use crate::store::MemoryStore;

#[test]
fn test_skip_is_the_default_policy() {
    let mut store = MemoryStore::new();
    let status = Loader::new()
        .with_reader(StaticSource("BROKEN\nKEY=VAL\n"))
        .load(&mut store)
        .expect("default policy must tolerate malformed lines");

    assert!(status.is_loaded());
}

#[test]
fn test_error_policy_reports_missing_separator_with_line_number() {
    let mut store = MemoryStore::new();
    let result = Loader::new()
        .with_source("strict.env")
        .with_policy(MalformedLinePolicy::Error)
        .with_reader(StaticSource("GOOD=1\n# fine\nBROKEN\n"))
        .load(&mut store);

    match result {
        Err(LoadError::MalformedLine {
            source_name,
            line,
            kind,
        }) => {
            assert_eq!(source_name, "strict.env");
            assert_eq!(line, 3);
            assert_eq!(kind, MalformedKind::MissingSeparator);
        }
        other => panic!("Expected MalformedLine error, got {:?}", other),
    }
}

#[test]
fn test_error_policy_reports_empty_key() {
    let mut store = MemoryStore::new();
    let result = Loader::new()
        .with_policy(MalformedLinePolicy::Error)
        .with_reader(StaticSource("=value\n"))
        .load(&mut store);

    assert!(matches!(
        result,
        Err(LoadError::MalformedLine {
            line: 1,
            kind: MalformedKind::EmptyKey,
            ..
        })
    ));
}

#[test]
fn test_error_policy_merges_nothing_from_a_bad_source() {
    let mut store = MemoryStore::new();
    let result = Loader::new()
        .with_policy(MalformedLinePolicy::Error)
        .with_reader(StaticSource("GOOD=1\nBROKEN\nALSO_GOOD=2\n"))
        .load(&mut store);

    assert!(result.is_err());
    assert!(
        store.is_empty(),
        "No entry may be merged when the source is rejected"
    );
}

#[test]
fn test_policy_error_does_not_leak_line_contents() {
    let secret = "supersecret_token_12345";
    let mut store = MemoryStore::new();

    // The offending line and a neighboring valid line both carry the secret.
    let result = Loader::new()
        .with_policy(MalformedLinePolicy::Error)
        .with_reader(StaticSource(
            "PASSWORD=supersecret_token_12345\nsupersecret_token_12345_NO_EQUALS\n",
        ))
        .load(&mut store);

    let error_string = result.expect_err("strict policy must reject").to_string();
    assert!(
        !error_string.contains(secret),
        "Error message should NOT contain source contents: {}",
        error_string
    );
    assert!(
        error_string.contains("line 2"),
        "Error message should carry the line number: {}",
        error_string
    );
}
