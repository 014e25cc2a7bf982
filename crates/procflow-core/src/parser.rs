use std::path::Path;

use procflow_dsl::{
    load_schema_document, parse_flow_request_json, DslError, FlowRequest, FlowSchema, RequestVerifier,
    SchemaRegistry,
};

use crate::binder::Binder;
use crate::config::EngineConfig;
use crate::domain::Flow;
use crate::error::FlowError;
use crate::handler::HandlerRegistry;

/// Turns requests into runnable flows.
///
/// Owns the schemas requests are verified against and the handlers they are
/// bound to. Register everything up front; parsing only reads, so a shared
/// `&FlowParser` can serve any number of threads.
#[derive(Debug, Default)]
pub struct FlowParser {
    schemas: SchemaRegistry,
    handlers: HandlerRegistry,
}

impl FlowParser {
    pub fn new(handlers: HandlerRegistry) -> Self {
        Self {
            schemas: SchemaRegistry::new(),
            handlers,
        }
    }

    /// Create a parser with every schema document in `config.schema_paths` registered
    pub fn from_config(config: &EngineConfig, handlers: HandlerRegistry) -> Result<Self, DslError> {
        let mut parser = Self::new(handlers);
        for path in &config.schema_paths {
            parser.load_schemas(path)?;
        }
        Ok(parser)
    }

    /// Register `schema` under `name`, returning the schema it replaced
    pub fn add(&mut self, name: impl Into<String>, schema: FlowSchema) -> Option<FlowSchema> {
        self.schemas.register(name, schema)
    }

    pub fn lookup(&self, name: &str) -> Option<&FlowSchema> {
        self.schemas.lookup(name)
    }

    /// Register every flow of the schema document at `path`; returns how many
    pub fn load_schemas(&mut self, path: impl AsRef<Path>) -> Result<usize, DslError> {
        let path = path.as_ref();
        let document = load_schema_document(path)?;
        let count = document.flows.len();
        self.schemas.register_document(document);
        tracing::info!(path = %path.display(), flows = count, "Schema document loaded");
        Ok(count)
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    /// Check `request` against its registered schema
    pub fn verify(&self, request: &FlowRequest) -> Result<&FlowSchema, FlowError> {
        Ok(RequestVerifier::new(&self.schemas).verify(request)?)
    }

    /// Resolve the handlers of `request` without verifying it
    pub fn bind(&self, request: &FlowRequest) -> Result<Flow, FlowError> {
        Ok(Binder::new(&self.handlers).bind(request)?)
    }

    /// Verify `request`, then bind it.
    ///
    /// Verification failures win over missing handlers.
    pub fn parse(&self, request: &FlowRequest) -> Result<Flow, FlowError> {
        self.verify(request)?;
        self.bind(request)
    }

    /// Decode a JSON request and parse it
    pub fn parse_json(&self, json: &str) -> Result<Flow, FlowError> {
        let request = parse_flow_request_json(json)?;
        self.parse(&request)
    }
}
