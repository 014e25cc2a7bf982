use crate::flow::{FlowRequest, FlowSchema, ProcessSchema, RequestProcess};
use crate::registry::SchemaRegistry;
use crate::validation::VerificationError;

/// Checks requests against the schemas of a [`SchemaRegistry`].
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. the flow name is registered
/// 2. the process count matches
/// 3. per position: the process name matches, then the input count matches
///
/// Processes are compared by position, never matched by name. Input names are
/// not compared, only their number.
pub struct RequestVerifier<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> RequestVerifier<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Verify `request`, returning the schema it conforms to
    pub fn verify(&self, request: &FlowRequest) -> Result<&'a FlowSchema, VerificationError> {
        tracing::debug!(
            flow = %request.name,
            processes = request.processes.len(),
            "Verifying flow request"
        );

        match self.check(request) {
            Ok(schema) => Ok(schema),
            Err(err) => {
                tracing::warn!(flow = %request.name, code = err.code(), "{}", err);
                Err(err)
            }
        }
    }

    fn check(&self, request: &FlowRequest) -> Result<&'a FlowSchema, VerificationError> {
        let schema = self
            .registry
            .lookup(&request.name)
            .ok_or_else(|| VerificationError::FlowNotFound {
                flow: request.name.clone(),
            })?;

        Self::check_process_count(schema, request)?;

        for (position, (expected, actual)) in schema
            .process_definitions
            .iter()
            .zip(&request.processes)
            .enumerate()
        {
            Self::check_process_name(position, expected, actual)?;
            Self::check_input_count(position, expected, actual)?;
        }

        Ok(schema)
    }

    fn check_process_count(schema: &FlowSchema, request: &FlowRequest) -> Result<(), VerificationError> {
        if schema.process_definitions.len() != request.processes.len() {
            return Err(VerificationError::InvalidRequest {
                flow: request.name.clone(),
                expected: schema.process_definitions.len(),
                actual: request.processes.len(),
            });
        }
        Ok(())
    }

    fn check_process_name(
        position: usize,
        expected: &ProcessSchema,
        actual: &RequestProcess,
    ) -> Result<(), VerificationError> {
        if expected.name != actual.name {
            return Err(VerificationError::InvalidRequestProcess {
                position,
                expected: expected.name.clone(),
                actual: actual.name.clone(),
            });
        }
        Ok(())
    }

    fn check_input_count(
        position: usize,
        expected: &ProcessSchema,
        actual: &RequestProcess,
    ) -> Result<(), VerificationError> {
        if expected.defined_inputs.len() != actual.defined_inputs.len() {
            return Err(VerificationError::InvalidRequestInputs {
                position,
                process: actual.name.clone(),
                expected: expected.defined_inputs.len(),
                actual: actual.defined_inputs.len(),
            });
        }
        Ok(())
    }
}

/// Verify `request` against `registry`
pub fn verify_request<'a>(
    registry: &'a SchemaRegistry,
    request: &FlowRequest,
) -> Result<&'a FlowSchema, VerificationError> {
    RequestVerifier::new(registry).verify(request)
}
