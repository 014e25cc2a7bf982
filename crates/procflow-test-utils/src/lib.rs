//! Testing utilities for procflow.
//!
//! Fixtures for the "Stake" flow used throughout the test suites, builders for
//! ready-to-use parsers, reference and recording handlers, a mockall handler
//! mock and assertion helpers for contexts and errors.

pub mod assertions;
pub mod builders;
pub mod data_generators;
pub mod handlers;
pub mod mocks;

/// Re-export commonly used types for convenience
pub use mockall;

pub use assertions::{assert_context_str, assert_error_kinds, AssertionError};
pub use builders::FlowParserBuilder;
pub use handlers::RecordingHandler;
pub use mocks::MockHandler;
