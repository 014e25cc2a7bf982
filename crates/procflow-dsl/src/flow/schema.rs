use serde::{Deserialize, Serialize};

/// The registered, authoritative description of a flow.
///
/// The order of `process_definitions` is significant: a request must list its
/// processes in exactly this order to verify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSchema {
    /// Name of the flow
    pub name: String,

    /// Expected processes, in execution order
    #[serde(default, rename = "processes")]
    pub process_definitions: Vec<ProcessSchema>,
}

/// The expected shape of a single process in a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSchema {
    /// Name of the process; also the key its handler is registered under
    pub name: String,

    /// Expected inputs. Only the number of inputs is checked against a request.
    #[serde(default, rename = "inputs")]
    pub defined_inputs: Vec<InputSchema>,
}

/// Describes one input of a process.
///
/// `input_type` and `meta` are opaque tags. They are carried for documentation
/// and for handlers that want them, never enforced against request values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSchema {
    /// Name of the input
    pub name: String,

    /// Semantic type tag (e.g., "string")
    #[serde(default, rename = "type")]
    pub input_type: String,

    /// Free-form auxiliary tag (e.g., "bigint")
    #[serde(default)]
    pub meta: String,
}

impl FlowSchema {
    /// Create an empty schema with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            process_definitions: Vec::new(),
        }
    }

    /// Append a process definition
    pub fn process(mut self, process: ProcessSchema) -> Self {
        self.process_definitions.push(process);
        self
    }
}

impl ProcessSchema {
    /// Create a process definition without inputs
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defined_inputs: Vec::new(),
        }
    }

    /// Append an input definition
    pub fn input(mut self, input: InputSchema) -> Self {
        self.defined_inputs.push(input);
        self
    }
}

impl InputSchema {
    pub fn new(
        name: impl Into<String>,
        input_type: impl Into<String>,
        meta: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            meta: meta.into(),
        }
    }
}
