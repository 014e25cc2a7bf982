use std::collections::HashMap;

use crate::flow::{FlowSchema, SchemaDocument};

/// Holds the flow schemas requests are verified against, keyed by name.
///
/// Schemas are not validated when registered; a malformed schema only shows
/// up when a request is verified against it. The registry is meant to be
/// populated once and then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, FlowSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `schema` under `name`, replacing and returning any schema that
    /// was registered under the same name.
    pub fn register(&mut self, name: impl Into<String>, schema: FlowSchema) -> Option<FlowSchema> {
        let name = name.into();
        let previous = self.schemas.insert(name.clone(), schema);
        if previous.is_some() {
            tracing::debug!(flow = %name, "Flow schema overwritten");
        } else {
            tracing::debug!(flow = %name, "Flow schema registered");
        }
        previous
    }

    /// Register every flow of a schema document under its own name
    pub fn register_document(&mut self, document: SchemaDocument) {
        for schema in document.flows {
            let name = schema.name.clone();
            self.register(name, schema);
        }
    }

    /// Look up the schema registered under `name`
    pub fn lookup(&self, name: &str) -> Option<&FlowSchema> {
        self.schemas.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
