//! # Procflow DSL
//!
//! Data model and structural checks for procflow: the flow schemas callers
//! register, the requests that claim to instantiate them, the registry that
//! holds schemas, and the verifier that decides whether a request conforms.
//!
//! ## Example
//!
//! ```
//! use procflow_dsl::{parse_flow_request_json, verify_request, FlowSchema, ProcessSchema, SchemaRegistry};
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register("Ping", FlowSchema::new("Ping").process(ProcessSchema::new("ping")));
//!
//! let request = parse_flow_request_json(
//!     r#"{ "name": "Ping", "process_definitions": [ { "name": "ping", "defined_input": [] } ] }"#,
//! ).unwrap();
//!
//! assert!(verify_request(&registry, &request).is_ok());
//! ```

mod error;
mod parser;
mod registry;

pub mod flow;
pub mod validation;

pub use error::DslError;
pub use flow::{
    FlowRequest, FlowSchema, InputSchema, ProcessSchema, RequestInput, RequestProcess,
    SchemaDocument,
};
pub use parser::{
    load_schema_document, parse_flow_request_json, parse_flow_request_yaml,
    parse_schema_document, SUPPORTED_DSL_VERSION,
};
pub use registry::SchemaRegistry;
pub use validation::{error_codes, verify_request, RequestVerifier, VerificationError};

/// Returns a version string for the procflow DSL crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
