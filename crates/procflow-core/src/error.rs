use std::fmt;

use procflow_dsl::{DslError, VerificationError};
use thiserror::Error;

/// The kinds of failure the engine reports.
///
/// A single [`FlowError`] carries several kinds at once: a generic parent
/// (e.g. `ParserFailure`) and the specific cause (e.g. `HandlerNotFound`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Anything that stopped a request from becoming a flow
    ParserFailure,
    /// The request did not conform to its schema
    SchemaVerificationFailure,
    FlowNotFound,
    InvalidRequest,
    InvalidRequestProcess,
    InvalidRequestInputs,
    HandlerNotFound,
    /// A handler failed while the flow was running
    ProcessFailure,
    /// The request could not be decoded
    Decode,
}

impl ErrorKind {
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::ParserFailure => "critical parser failure",
            ErrorKind::SchemaVerificationFailure => "schema verification failed",
            ErrorKind::FlowNotFound => "flow not defined in the schema",
            ErrorKind::InvalidRequest => "invalid flow request",
            ErrorKind::InvalidRequestProcess => "invalid flow request process",
            ErrorKind::InvalidRequestInputs => "invalid flow request process defined inputs",
            ErrorKind::HandlerNotFound => "process handler not found",
            ErrorKind::ProcessFailure => "critical process failure",
            ErrorKind::Decode => "flow request could not be decoded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl From<&VerificationError> for ErrorKind {
    fn from(err: &VerificationError) -> Self {
        match err {
            VerificationError::FlowNotFound { .. } => ErrorKind::FlowNotFound,
            VerificationError::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            VerificationError::InvalidRequestProcess { .. } => ErrorKind::InvalidRequestProcess,
            VerificationError::InvalidRequestInputs { .. } => ErrorKind::InvalidRequestInputs,
        }
    }
}

/// Raised while binding a verified request to handlers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("process handler not found at position {position}: handler: {process}")]
    HandlerNotFound { position: usize, process: String },
}

/// The error a handler returned, as the source of a process failure
#[derive(Error, Debug)]
#[error(transparent)]
pub struct HandlerError(#[from] anyhow::Error);

impl HandlerError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.0
    }

    /// Look for a specific error type in the handler's error
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}

/// Every error the parse → bind → run pipeline returns to its caller
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("critical parser failure: schema verification failed: {0}")]
    Verification(#[from] VerificationError),

    #[error("critical parser failure: {0}")]
    Binding(#[from] BindError),

    #[error("critical process failure: index: {index}, process: {process}: {source}")]
    ProcessFailure {
        index: usize,
        process: String,
        #[source]
        source: HandlerError,
    },

    #[error("critical parser failure: {0}")]
    Decode(#[from] DslError),
}

impl FlowError {
    /// All kinds this error belongs to, from the most generic to the most specific
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self {
            FlowError::Verification(err) => vec![
                ErrorKind::ParserFailure,
                ErrorKind::SchemaVerificationFailure,
                ErrorKind::from(err),
            ],
            FlowError::Binding(BindError::HandlerNotFound { .. }) => {
                vec![ErrorKind::ParserFailure, ErrorKind::HandlerNotFound]
            }
            FlowError::ProcessFailure { .. } => vec![ErrorKind::ProcessFailure],
            FlowError::Decode(_) => vec![ErrorKind::ParserFailure, ErrorKind::Decode],
        }
    }

    /// Whether `kind` is present in this error
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kinds().contains(&kind)
    }

    /// The most specific kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlowError::Verification(err) => ErrorKind::from(err),
            FlowError::Binding(BindError::HandlerNotFound { .. }) => ErrorKind::HandlerNotFound,
            FlowError::ProcessFailure { .. } => ErrorKind::ProcessFailure,
            FlowError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FlowError::Verification(err) => err.code(),
            FlowError::Binding(BindError::HandlerNotFound { .. }) => "ERR_BIND_HANDLER_NOT_FOUND",
            FlowError::ProcessFailure { .. } => "ERR_FLOW_PROCESS_FAILURE",
            FlowError::Decode(err) => err.error_code(),
        }
    }

    /// Index and name of the process whose handler failed, for run failures
    pub fn failed_process(&self) -> Option<(usize, &str)> {
        match self {
            FlowError::ProcessFailure { index, process, .. } => Some((*index, process.as_str())),
            _ => None,
        }
    }

    /// The handler's own error, for run failures
    pub fn handler_error(&self) -> Option<&HandlerError> {
        match self {
            FlowError::ProcessFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_verification_kinds_are_layered() {
        let err = FlowError::from(VerificationError::FlowNotFound {
            flow: "Stake".to_string(),
        });

        assert_eq!(
            err.kinds(),
            vec![
                ErrorKind::ParserFailure,
                ErrorKind::SchemaVerificationFailure,
                ErrorKind::FlowNotFound
            ]
        );
        assert!(err.is(ErrorKind::SchemaVerificationFailure));
        assert!(!err.is(ErrorKind::HandlerNotFound));
        assert_eq!(err.kind(), ErrorKind::FlowNotFound);
        assert_eq!(err.error_code(), procflow_dsl::error_codes::FLOW_NOT_FOUND);
    }

    #[test]
    fn test_binding_kinds() {
        let err = FlowError::from(BindError::HandlerNotFound {
            position: 0,
            process: "prepareCallData".to_string(),
        });

        assert!(err.is(ErrorKind::ParserFailure));
        assert!(err.is(ErrorKind::HandlerNotFound));
        assert!(!err.is(ErrorKind::SchemaVerificationFailure));
        assert!(err.to_string().contains("handler: prepareCallData"));
    }

    #[test]
    fn test_process_failure_wraps_handler_error() {
        let err = FlowError::ProcessFailure {
            index: 0,
            process: "prepareCallData".to_string(),
            source: HandlerError::from(anyhow::anyhow!("failed to sign userOp")),
        };

        assert_eq!(err.kinds(), vec![ErrorKind::ProcessFailure]);
        assert!(!err.is(ErrorKind::ParserFailure));
        assert_eq!(err.failed_process(), Some((0, "prepareCallData")));

        let message = err.to_string();
        assert!(message.contains("index: 0"));
        assert!(message.contains("failed to sign userOp"));

        let source = err.source().expect("process failure should have a source");
        assert_eq!(source.to_string(), "failed to sign userOp");
    }

    #[test]
    fn test_handler_error_downcast() {
        #[derive(Debug, Error)]
        #[error("insufficient balance")]
        struct InsufficientBalance;

        let err = HandlerError::from(anyhow::Error::new(InsufficientBalance));
        assert!(err.downcast_ref::<InsufficientBalance>().is_some());
        assert!(err.downcast_ref::<BindError>().is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::ProcessFailure.to_string(), "critical process failure");
        assert_eq!(ErrorKind::HandlerNotFound.to_string(), "process handler not found");
    }
}
