use procflow_dsl::FlowRequest;

use crate::domain::{DefinedInput, Flow, Process};
use crate::error::BindError;
use crate::handler::HandlerRegistry;

/// Resolves each process of a request to its registered handler
#[derive(Debug, Clone, Copy)]
pub struct Binder<'a> {
    handlers: &'a HandlerRegistry,
}

impl<'a> Binder<'a> {
    pub fn new(handlers: &'a HandlerRegistry) -> Self {
        Self { handlers }
    }

    /// Build a runnable flow from `request`.
    ///
    /// Processes keep the request's order and inputs. The first process without
    /// a handler fails the whole bind. The request is not checked against a
    /// schema here; verify it first.
    pub fn bind(&self, request: &FlowRequest) -> Result<Flow, BindError> {
        let mut processes = Vec::with_capacity(request.processes.len());

        for (position, requested) in request.processes.iter().enumerate() {
            let inputs: Vec<DefinedInput> = requested.defined_inputs.iter().map(DefinedInput::from).collect();

            let handler = self.handlers.get(&requested.name).ok_or_else(|| {
                tracing::warn!(
                    flow = %request.name,
                    position,
                    process = %requested.name,
                    "No handler registered for process"
                );
                BindError::HandlerNotFound {
                    position,
                    process: requested.name.clone(),
                }
            })?;

            processes.push(Process::new(requested.name.clone(), handler, inputs));
        }

        tracing::debug!(flow = %request.name, processes = processes.len(), "Flow bound");
        Ok(Flow::new(request.name.clone(), processes))
    }
}

/// Bind `request` against `handlers`
pub fn bind_request(handlers: &HandlerRegistry, request: &FlowRequest) -> Result<Flow, BindError> {
    Binder::new(handlers).bind(request)
}
