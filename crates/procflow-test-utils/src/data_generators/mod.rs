//! Test data generators for procflow.
//!
//! Requests, schemas and schema documents for the "Stake" flow and the
//! variants that break it in one specific way each.

mod stake;

// Re-export all data generators for easy access
pub use stake::*;
