//! # Procflow
//!
//! Named flows of processes, declared once as schemas and instantiated by
//! requests. A request is verified against its schema, each process is bound
//! to a handler, and the flow runs its handlers in order over one shared
//! execution context.
//!
//! ```
//! use procflow::prelude::*;
//!
//! let handlers = HandlerRegistry::new()
//!     .with_fn("prepareCallData", |context, _inputs| {
//!         context.insert("calldata", "to mars");
//!         Ok(())
//!     })
//!     .with_fn("processUserOp", |context, _inputs| {
//!         let calldata = context.get_str("calldata")?.to_string();
//!         context.insert("response", calldata);
//!         Ok(())
//!     });
//!
//! let mut parser = FlowParser::new(handlers);
//! parser.add(
//!     "Stake",
//!     FlowSchema::new("Stake")
//!         .process(ProcessSchema::new("prepareCallData"))
//!         .process(ProcessSchema::new("processUserOp")),
//! );
//!
//! let flow = parser
//!     .parse_json(r#"{"name": "Stake", "process_definitions": [
//!         {"name": "prepareCallData"}, {"name": "processUserOp"}
//!     ]}"#)
//!     .unwrap();
//!
//! let mut context = ExecutionContext::new();
//! flow.run(&mut context).unwrap();
//! assert_eq!(context.get_str("response").unwrap(), "to mars");
//! ```

#![forbid(unsafe_code)]

pub use procflow_core::{
    bind_request, find_input, init_tracing, require_input, BindError, Binder, ConfigError, ContextError, DataPacket,
    DefinedInput, EngineConfig, ErrorKind, ExecutionContext, Flow, FlowError, FlowParser, HandlerError,
    HandlerRegistry, InputError, LogFormat, Process, ProcessHandler, RunId,
};
pub use procflow_dsl::{
    load_schema_document, parse_flow_request_json, parse_flow_request_yaml, parse_schema_document, verify_request,
    DslError, FlowRequest, FlowSchema, InputSchema, ProcessSchema, RequestInput, RequestProcess, RequestVerifier,
    SchemaDocument, SchemaRegistry, VerificationError,
};

/// The types most callers need
pub mod prelude {
    pub use procflow_core::{
        DefinedInput, ErrorKind, ExecutionContext, Flow, FlowError, FlowParser, HandlerRegistry, ProcessHandler,
    };
    pub use procflow_dsl::{FlowRequest, FlowSchema, InputSchema, ProcessSchema, RequestInput, RequestProcess};
}
