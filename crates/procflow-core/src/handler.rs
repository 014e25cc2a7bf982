use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::context::ExecutionContext;
use crate::domain::DefinedInput;

/// Caller-supplied logic bound to a process name.
///
/// A handler receives the run's shared context and the inputs of its process.
/// Results for later processes are written into the context; returning an
/// error stops the run.
pub trait ProcessHandler: Send + Sync {
    fn handle(&self, context: &mut ExecutionContext, inputs: &[DefinedInput]) -> anyhow::Result<()>;
}

impl<F> ProcessHandler for F
where
    F: Fn(&mut ExecutionContext, &[DefinedInput]) -> anyhow::Result<()> + Send + Sync,
{
    fn handle(&self, context: &mut ExecutionContext, inputs: &[DefinedInput]) -> anyhow::Result<()> {
        self(context, inputs)
    }
}

/// Maps process names to the handlers that execute them.
///
/// Populate it before requests are parsed; a bound flow keeps its own
/// reference to each handler it resolved.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ProcessHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing and returning any handler with the same name
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H) -> Option<Arc<dyn ProcessHandler>>
    where
        H: ProcessHandler + 'static,
    {
        self.register_shared(name, Arc::new(handler))
    }

    /// Register a plain function or closure as a handler
    pub fn register_fn<F>(&mut self, name: impl Into<String>, handler: F) -> Option<Arc<dyn ProcessHandler>>
    where
        F: Fn(&mut ExecutionContext, &[DefinedInput]) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register_shared(name, Arc::new(handler))
    }

    /// Register a handler that is already shared
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn ProcessHandler>,
    ) -> Option<Arc<dyn ProcessHandler>> {
        let name = name.into();
        tracing::debug!(process = %name, "Process handler registered");
        self.handlers.insert(name, handler)
    }

    /// Builder-style registration
    pub fn with_fn<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut ExecutionContext, &[DefinedInput]) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.register_fn(name, handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ProcessHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered process names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}
