//! Parser builders for tests.

use std::sync::Arc;

use procflow_core::{DefinedInput, ExecutionContext, FlowParser, HandlerRegistry, ProcessHandler};
use procflow_dsl::FlowSchema;

use crate::data_generators::stake_schema;
use crate::handlers::stake_handlers;

/// Builds a [`FlowParser`] with the schemas and handlers a test needs.
#[derive(Debug, Default)]
pub struct FlowParserBuilder {
    schemas: Vec<(String, FlowSchema)>,
    handlers: HandlerRegistry,
}

impl FlowParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The "Stake" schema with both reference handlers
    pub fn stake() -> Self {
        Self {
            schemas: Vec::new(),
            handlers: stake_handlers(),
        }
        .schema(stake_schema())
    }

    /// Register `schema` under its own name
    pub fn schema(self, schema: FlowSchema) -> Self {
        let name = schema.name.clone();
        self.schema_as(name, schema)
    }

    /// Register `schema` under `name`
    pub fn schema_as(mut self, name: impl Into<String>, schema: FlowSchema) -> Self {
        self.schemas.push((name.into(), schema));
        self
    }

    pub fn handler<H>(mut self, name: impl Into<String>, handler: H) -> Self
    where
        H: ProcessHandler + 'static,
    {
        self.handlers.register(name, handler);
        self
    }

    pub fn handler_fn<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut ExecutionContext, &[DefinedInput]) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.handlers.register_fn(name, handler);
        self
    }

    pub fn shared_handler(mut self, name: impl Into<String>, handler: Arc<dyn ProcessHandler>) -> Self {
        self.handlers.register_shared(name, handler);
        self
    }

    pub fn without_handlers(mut self) -> Self {
        self.handlers = HandlerRegistry::new();
        self
    }

    pub fn build(self) -> FlowParser {
        let mut parser = FlowParser::new(self.handlers);
        for (name, schema) in self.schemas {
            parser.add(name, schema);
        }
        parser
    }
}
