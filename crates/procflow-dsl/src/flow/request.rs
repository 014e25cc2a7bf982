use serde::{Deserialize, Deserializer, Serialize};

/// An untrusted request claiming to instantiate a registered flow schema.
///
/// Field names follow the wire encoding:
///
/// ```json
/// {
///   "name": "Stake",
///   "process_definitions": [
///     { "name": "prepareCallData",
///       "defined_input": [
///         { "name": "stake_amount", "value": "100000", "type": "string", "metaType": "bigint" }
///       ] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRequest {
    /// Name of the schema this request claims to instantiate
    pub name: String,

    /// Processes in the order the caller wants them run
    #[serde(default, rename = "process_definitions", deserialize_with = "null_as_default")]
    pub processes: Vec<RequestProcess>,
}

/// One process invocation within a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestProcess {
    pub name: String,

    #[serde(default, rename = "defined_input", deserialize_with = "null_as_default")]
    pub defined_inputs: Vec<RequestInput>,
}

/// A named input value. The value is always a string on the wire; handlers
/// are responsible for interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInput {
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,

    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub input_type: String,

    #[serde(default, rename = "metaType", deserialize_with = "null_as_default")]
    pub meta_type: String,
}

/// Decode an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FlowRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            processes: Vec::new(),
        }
    }

    /// Append a process invocation
    pub fn process(mut self, process: RequestProcess) -> Self {
        self.processes.push(process);
        self
    }
}

impl RequestProcess {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defined_inputs: Vec::new(),
        }
    }

    /// Append an input
    pub fn input(mut self, input: RequestInput) -> Self {
        self.defined_inputs.push(input);
        self
    }
}

impl RequestInput {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        input_type: impl Into<String>,
        meta_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            input_type: input_type.into(),
            meta_type: meta_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let request = FlowRequest::new("Stake").process(
            RequestProcess::new("prepareCallData")
                .input(RequestInput::new("stake_amount", "100000", "string", "bigint")),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["process_definitions"][0]["name"], "prepareCallData");
        let input = &value["process_definitions"][0]["defined_input"][0];
        assert_eq!(input["value"], "100000");
        assert_eq!(input["type"], "string");
        assert_eq!(input["metaType"], "bigint");
    }

    #[test]
    fn test_missing_arrays_decode_as_empty() {
        let request: FlowRequest = serde_json::from_value(json!({
            "name": "Stake",
            "process_definitions": [{ "name": "processUserOp" }]
        }))
        .unwrap();

        assert_eq!(request.processes.len(), 1);
        assert!(request.processes[0].defined_inputs.is_empty());

        let bare: FlowRequest = serde_json::from_value(json!({ "name": "Stake" })).unwrap();
        assert!(bare.processes.is_empty());
    }
}
