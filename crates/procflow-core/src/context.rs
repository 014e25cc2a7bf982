use std::collections::HashMap;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::DataPacket;

/// Raised by the typed accessors of [`ExecutionContext`]
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("context key not found: {key}")]
    MissingKey { key: String },

    #[error("unexpected value kind for context key '{key}': expected {expected}, got {actual}")]
    UnexpectedValueKind {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("context key '{key}' could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key/value store shared by every process of a single flow run.
///
/// Handlers communicate only through the context: a later process reads what
/// an earlier one stored. A context belongs to exactly one run; it is not
/// meant to be shared between concurrent runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionContext {
    values: HashMap<String, DataPacket>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DataPacket>) -> Option<DataPacket> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&DataPacket> {
        self.values.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut DataPacket> {
        self.values.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<DataPacket> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataPacket)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get a value that must be present
    pub fn require(&self, key: &str) -> Result<&DataPacket, ContextError> {
        self.values.get(key).ok_or_else(|| ContextError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Get a value that must be a string
    pub fn get_str(&self, key: &str) -> Result<&str, ContextError> {
        let packet = self.require(key)?;
        packet.as_str().ok_or_else(|| unexpected_kind(key, "string", packet))
    }

    /// Get a value that must be an object
    pub fn get_object(&self, key: &str) -> Result<&serde_json::Map<String, serde_json::Value>, ContextError> {
        let packet = self.require(key)?;
        packet.as_object().ok_or_else(|| unexpected_kind(key, "object", packet))
    }

    /// Decode a value into `T`
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, ContextError> {
        self.require(key)?.to::<T>().map_err(|source| ContextError::Decode {
            key: key.to_string(),
            source,
        })
    }
}

fn unexpected_kind(key: &str, expected: &'static str, packet: &DataPacket) -> ContextError {
    ContextError::UnexpectedValueKind {
        key: key.to_string(),
        expected,
        actual: packet.kind_name(),
    }
}
