use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::ExecutionContext;
use crate::domain::process::Process;
use crate::error::{FlowError, HandlerError};

/// Identifies a single run of a flow in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A verified request bound to its handlers, ready to run.
///
/// A flow holds no per-run state, so one instance can be run any number of
/// times, including from several threads at once, each with its own context.
#[derive(Debug, Clone)]
pub struct Flow {
    name: String,
    processes: Vec<Process>,
}

impl Flow {
    pub(crate) fn new(name: String, processes: Vec<Process>) -> Self {
        Self { name, processes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process_names(&self) -> Vec<&str> {
        self.processes.iter().map(Process::name).collect()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Run every process in order against `context`.
    ///
    /// Stops at the first handler error; processes after it are not invoked
    /// and whatever earlier handlers wrote stays in the context.
    pub fn run(&self, context: &mut ExecutionContext) -> Result<(), FlowError> {
        let run_id = RunId::new();
        let span = tracing::info_span!("flow_run", flow = %self.name, run_id = %run_id);
        let _guard = span.enter();

        tracing::debug!(processes = self.processes.len(), "Flow run started");

        for (index, process) in self.processes.iter().enumerate() {
            tracing::debug!(index, process = %process.name(), "Running process");

            if let Err(err) = process.handler().handle(context, process.inputs()) {
                tracing::warn!(
                    index,
                    process = %process.name(),
                    error = %err,
                    "Process failed, stopping flow"
                );
                return Err(FlowError::ProcessFailure {
                    index,
                    process: process.name().to_string(),
                    source: HandlerError::from(err),
                });
            }
        }

        tracing::info!("Flow run completed");
        Ok(())
    }
}
