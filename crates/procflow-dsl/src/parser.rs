use std::path::Path;

use crate::error::DslError;
use crate::flow::{FlowRequest, SchemaDocument};

/// Schema document versions this crate understands
pub const SUPPORTED_DSL_VERSION: &str = "1.0";

/// Decode a flow request from its reference JSON encoding.
///
/// Decoding does not verify the request; that needs a schema registry.
pub fn parse_flow_request_json(json_str: &str) -> Result<FlowRequest, DslError> {
    let request: FlowRequest = serde_json::from_str(json_str)?;
    Ok(request)
}

/// Decode a flow request from YAML using the same field names as the JSON encoding
pub fn parse_flow_request_yaml(yaml_str: &str) -> Result<FlowRequest, DslError> {
    let request: FlowRequest = serde_yaml::from_str(yaml_str)?;
    Ok(request)
}

/// Parse a YAML (or JSON) string into a SchemaDocument.
///
/// Only the document version is checked here. The schemas themselves are
/// accepted as-is.
pub fn parse_schema_document(yaml_str: &str) -> Result<SchemaDocument, DslError> {
    let document: SchemaDocument = serde_yaml::from_str(yaml_str)?;

    if document.dsl_version != SUPPORTED_DSL_VERSION {
        return Err(DslError::UnsupportedVersion(document.dsl_version));
    }

    Ok(document)
}

/// Read and parse a schema document from disk
pub fn load_schema_document(path: impl AsRef<Path>) -> Result<SchemaDocument, DslError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| DslError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_schema_document(&contents)?;
    tracing::debug!(
        path = %path.display(),
        flows = document.flows.len(),
        "Loaded schema document"
    );
    Ok(document)
}
