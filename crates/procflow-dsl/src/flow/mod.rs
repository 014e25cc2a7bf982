mod request;
mod schema;

pub use request::{FlowRequest, RequestInput, RequestProcess};
pub use schema::{FlowSchema, InputSchema, ProcessSchema};

use serde::{Deserialize, Serialize};

/// A schema document: a versioned collection of flow schemas.
/// This is the top-level structure read from schema files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// The DSL version (e.g., "1.0")
    pub dsl_version: String,

    /// Flow schemas declared by the document
    #[serde(default)]
    pub flows: Vec<FlowSchema>,
}
