//! Reference handlers for the "Stake" flow and a recording handler.

use std::sync::Arc;

use parking_lot::Mutex;
use procflow_core::{DefinedInput, ExecutionContext, HandlerRegistry, ProcessHandler};
use serde_json::json;

/// Stores `"calldata" = "to mars"`
pub fn prepare_call_data(context: &mut ExecutionContext, _inputs: &[DefinedInput]) -> anyhow::Result<()> {
    context.insert("calldata", "to mars");
    Ok(())
}

/// Reads `"calldata"` and stores `"response" = {"data": <calldata>}`
pub fn process_user_op(context: &mut ExecutionContext, _inputs: &[DefinedInput]) -> anyhow::Result<()> {
    let calldata = context.get_str("calldata")?.to_string();
    context.insert("response", json!({ "data": calldata }));
    Ok(())
}

/// Always fails
pub fn sign_user_op(_context: &mut ExecutionContext, _inputs: &[DefinedInput]) -> anyhow::Result<()> {
    anyhow::bail!("failed to sign userOp")
}

/// Handlers for both "Stake" processes
pub fn stake_handlers() -> HandlerRegistry {
    HandlerRegistry::new()
        .with_fn("prepareCallData", prepare_call_data)
        .with_fn("processUserOp", process_user_op)
}

/// Records every invocation into a log shared with its clones.
///
/// Register one clone per process with distinct labels to observe the order
/// processes ran in and which were skipped.
#[derive(Debug, Clone)]
pub struct RecordingHandler {
    label: String,
    fail: bool,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// One recorded invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub label: String,
    pub inputs: Vec<DefinedInput>,
}

impl RecordingHandler {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handler with another label writing to the same log
    pub fn sibling(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fail: false,
            calls: Arc::clone(&self.calls),
        }
    }

    /// Make this handler fail after recording the call
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Labels in invocation order
    pub fn labels(&self) -> Vec<String> {
        self.calls.lock().iter().map(|call| call.label.clone()).collect()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl ProcessHandler for RecordingHandler {
    fn handle(&self, context: &mut ExecutionContext, inputs: &[DefinedInput]) -> anyhow::Result<()> {
        self.calls.lock().push(RecordedCall {
            label: self.label.clone(),
            inputs: inputs.to_vec(),
        });
        context.insert(format!("visited.{}", self.label), true);

        if self.fail {
            anyhow::bail!("{} failed", self.label);
        }
        Ok(())
    }
}
