use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use procflow_dsl::RequestInput;
use thiserror::Error;

use crate::handler::ProcessHandler;
use crate::types::DataPacket;

/// Raised by the typed accessors of [`DefinedInput`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("input not defined: {name}")]
    Missing { name: String },

    #[error("unexpected value kind for input '{name}': expected {expected}, got {actual}")]
    UnexpectedValueKind {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("input '{name}' value '{value}' could not be parsed: {reason}")]
    Parse {
        name: String,
        value: String,
        reason: String,
    },
}

/// An input handed to a handler: the request input, copied field for field
#[derive(Debug, Clone, PartialEq)]
pub struct DefinedInput {
    pub name: String,
    pub value: DataPacket,
    pub input_type: String,
    pub meta: String,
}

impl DefinedInput {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<DataPacket>,
        input_type: impl Into<String>,
        meta: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            input_type: input_type.into(),
            meta: meta.into(),
        }
    }

    /// The value as a string; request values always are
    pub fn value_str(&self) -> Result<&str, InputError> {
        self.value
            .as_str()
            .ok_or_else(|| InputError::UnexpectedValueKind {
                name: self.name.clone(),
                expected: "string",
                actual: self.value.kind_name(),
            })
    }

    /// Parse the string value into `T` (e.g. an amount into `u128`)
    pub fn value_as<T>(&self) -> Result<T, InputError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.value_str()?;
        raw.parse::<T>().map_err(|err| InputError::Parse {
            name: self.name.clone(),
            value: raw.to_string(),
            reason: err.to_string(),
        })
    }
}

impl From<&RequestInput> for DefinedInput {
    fn from(input: &RequestInput) -> Self {
        Self {
            name: input.name.clone(),
            value: DataPacket::from_string(&input.value),
            input_type: input.input_type.clone(),
            meta: input.meta_type.clone(),
        }
    }
}

/// Find an input by name
pub fn find_input<'a>(inputs: &'a [DefinedInput], name: &str) -> Option<&'a DefinedInput> {
    inputs.iter().find(|input| input.name == name)
}

/// Find an input by name, failing if it is absent
pub fn require_input<'a>(inputs: &'a [DefinedInput], name: &str) -> Result<&'a DefinedInput, InputError> {
    find_input(inputs, name).ok_or_else(|| InputError::Missing {
        name: name.to_string(),
    })
}

/// One bound step of a flow: a name, its inputs and the handler that runs it.
///
/// Only the binder creates processes, so every process has a handler.
#[derive(Clone)]
pub struct Process {
    name: String,
    handler: Arc<dyn ProcessHandler>,
    inputs: Vec<DefinedInput>,
}

impl Process {
    pub(crate) fn new(name: String, handler: Arc<dyn ProcessHandler>, inputs: Vec<DefinedInput>) -> Self {
        Self {
            name,
            handler,
            inputs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[DefinedInput] {
        &self.inputs
    }

    pub fn handler(&self) -> &Arc<dyn ProcessHandler> {
        &self.handler
    }
}

impl fmt::Debug for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Process")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}
