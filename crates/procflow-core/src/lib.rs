//!
//! Procflow Core - binding and execution engine for procflow
//!
//! Takes requests described by `procflow-dsl`, verifies them against
//! registered schemas, binds each process to a caller-supplied handler and
//! runs the resulting flow in order over a shared execution context.
//!
//! ```
//! use procflow_core::{ExecutionContext, FlowParser, HandlerRegistry};
//! use procflow_dsl::{FlowRequest, FlowSchema, ProcessSchema, RequestProcess};
//!
//! let handlers = HandlerRegistry::new().with_fn("ping", |context, _inputs| {
//!     context.insert("pong", true);
//!     Ok(())
//! });
//!
//! let mut parser = FlowParser::new(handlers);
//! parser.add("Ping", FlowSchema::new("Ping").process(ProcessSchema::new("ping")));
//!
//! let flow = parser
//!     .parse(&FlowRequest::new("Ping").process(RequestProcess::new("ping")))
//!     .unwrap();
//!
//! let mut context = ExecutionContext::new();
//! flow.run(&mut context).unwrap();
//! assert!(context.contains_key("pong"));
//! ```

#![forbid(unsafe_code)]

/// Domain layer - bound processes and flows
pub mod domain;

/// Core types
pub mod types;

/// Error types
pub mod error;

/// Per-run key/value store
pub mod context;

/// Handler contract and registry
pub mod handler;

/// Request to flow binding
pub mod binder;

/// Verify and bind pipeline
pub mod parser;

/// Engine configuration
pub mod config;

/// Tracing setup
pub mod telemetry;

pub use binder::{bind_request, Binder};
pub use config::{ConfigError, EngineConfig, LogFormat};
pub use context::{ContextError, ExecutionContext};
pub use domain::{find_input, require_input, DefinedInput, Flow, InputError, Process, RunId};
pub use error::{BindError, ErrorKind, FlowError, HandlerError};
pub use handler::{HandlerRegistry, ProcessHandler};
pub use parser::FlowParser;
pub use telemetry::init_tracing;
pub use types::DataPacket;

/// Returns a version string for the procflow core crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
