use thiserror::Error;

mod verifier;

pub use verifier::{verify_request, RequestVerifier};

/// Verification error codes
pub mod error_codes {
    /// The request names a flow that was never registered
    pub const FLOW_NOT_FOUND: &str = "ERR_DSL_VALIDATION_FLOW_NOT_FOUND";

    /// Process count differs between schema and request
    pub const INVALID_REQUEST: &str = "ERR_DSL_VALIDATION_INVALID_REQUEST";

    /// Process name differs at some position
    pub const INVALID_REQUEST_PROCESS: &str = "ERR_DSL_VALIDATION_INVALID_REQUEST_PROCESS";

    /// Input count differs for some process
    pub const INVALID_REQUEST_INPUTS: &str = "ERR_DSL_VALIDATION_INVALID_REQUEST_INPUTS";
}

/// Why a request does not conform to its registered schema.
///
/// Only the first violation found is ever reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("flow not defined in the schema: {flow}")]
    FlowNotFound { flow: String },

    #[error("invalid flow request '{flow}': len mismatch schema({expected}) != request({actual})")]
    InvalidRequest {
        flow: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "invalid flow request process at position {position}: \
         process name mismatch schema({expected}) != request({actual})"
    )]
    InvalidRequestProcess {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error(
        "invalid flow request process defined inputs at position {position} ({process}): \
         len mismatch schema({expected}) != request({actual})"
    )]
    InvalidRequestInputs {
        position: usize,
        process: String,
        expected: usize,
        actual: usize,
    },
}

impl VerificationError {
    /// Stable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            VerificationError::FlowNotFound { .. } => error_codes::FLOW_NOT_FOUND,
            VerificationError::InvalidRequest { .. } => error_codes::INVALID_REQUEST,
            VerificationError::InvalidRequestProcess { .. } => error_codes::INVALID_REQUEST_PROCESS,
            VerificationError::InvalidRequestInputs { .. } => error_codes::INVALID_REQUEST_INPUTS,
        }
    }

    /// Location of the violation in the request, when it has one
    /// (e.g., "process_definitions[1].defined_input")
    pub fn path(&self) -> Option<String> {
        match self {
            VerificationError::FlowNotFound { .. } => Some("name".to_string()),
            VerificationError::InvalidRequest { .. } => Some("process_definitions".to_string()),
            VerificationError::InvalidRequestProcess { position, .. } => {
                Some(format!("process_definitions[{}].name", position))
            }
            VerificationError::InvalidRequestInputs { position, .. } => {
                Some(format!("process_definitions[{}].defined_input", position))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = VerificationError::InvalidRequestProcess {
            position: 0,
            expected: "signUserOp".to_string(),
            actual: "prepareCallData".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("position 0"));
        assert!(message.contains("schema(signUserOp) != request(prepareCallData)"));

        let err = VerificationError::InvalidRequest {
            flow: "Stake".to_string(),
            expected: 1,
            actual: 2,
        };
        assert!(err.to_string().contains("schema(1) != request(2)"));
    }

    #[test]
    fn test_codes_and_paths() {
        let err = VerificationError::InvalidRequestInputs {
            position: 1,
            process: "processUserOp".to_string(),
            expected: 0,
            actual: 1,
        };
        assert_eq!(err.code(), error_codes::INVALID_REQUEST_INPUTS);
        assert_eq!(err.path().as_deref(), Some("process_definitions[1].defined_input"));

        let err = VerificationError::FlowNotFound { flow: "Stake".to_string() };
        assert_eq!(err.code(), error_codes::FLOW_NOT_FOUND);
    }
}
