//! Assertion utilities for execution contexts and flow errors.
//!
//! Helpers return a `Result` describing the mismatch, so tests can `unwrap()`
//! them or inspect the failure.

use procflow_core::{ErrorKind, ExecutionContext, FlowError};
use thiserror::Error;

/// Error type for assertion failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssertionError {
    #[error("Missing context key: {0}")]
    MissingKey(String),

    #[error("Context key {key} is not a string: {actual}")]
    NotAString { key: String, actual: String },

    #[error("Invalid context value for {key}: expected {expected}, got {actual}")]
    InvalidValue {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("Error kind {kind:?} missing; error has {actual:?}")]
    MissingKind { kind: ErrorKind, actual: Vec<ErrorKind> },
}

/// Asserts that `context` holds the string `expected` under `key`.
pub fn assert_context_str(context: &ExecutionContext, key: &str, expected: &str) -> Result<(), AssertionError> {
    let packet = context
        .get(key)
        .ok_or_else(|| AssertionError::MissingKey(key.to_string()))?;

    let actual = packet.as_str().ok_or_else(|| AssertionError::NotAString {
        key: key.to_string(),
        actual: packet.as_value().to_string(),
    })?;

    if actual != expected {
        return Err(AssertionError::InvalidValue {
            key: key.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Asserts that `err` carries every kind in `kinds`.
pub fn assert_error_kinds(err: &FlowError, kinds: &[ErrorKind]) -> Result<(), AssertionError> {
    match kinds.iter().find(|kind| !err.is(**kind)) {
        Some(kind) => Err(AssertionError::MissingKind {
            kind: *kind,
            actual: err.kinds(),
        }),
        None => Ok(()),
    }
}
