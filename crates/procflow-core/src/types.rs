use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Represents a packet of data flowing through the system
///
/// This is the open value type used for process inputs and execution context
/// entries: a wrapper around a JSON value with helpers for reading it back in
/// the shape a handler expects.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DataPacket {
    /// The inner JSON value
    pub value: serde_json::Value,
}

impl DataPacket {
    /// Create a new data packet from a JSON value
    #[inline]
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Create a null data packet
    #[inline]
    pub fn null() -> Self {
        Self {
            value: serde_json::Value::Null,
        }
    }

    /// Get the inner JSON value
    #[inline]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a mutable reference to the inner JSON value
    #[inline]
    pub fn as_value_mut(&mut self) -> &mut serde_json::Value {
        &mut self.value
    }

    /// Check if the data packet is null
    #[inline]
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Try to convert the data packet to a string
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    /// Try to convert the data packet to a boolean
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    /// Try to convert the data packet to an object
    #[inline]
    pub fn as_object(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.value.as_object()
    }

    /// Name of the JSON kind held by this packet, for error messages
    pub fn kind_name(&self) -> &'static str {
        match &self.value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }

    /// Try to convert the data packet to a specific type
    pub fn to<T>(&self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        T::deserialize(&self.value)
    }

    /// Create a data packet from a serializable value
    pub fn from_serialize<T>(value: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize,
    {
        Ok(Self::new(serde_json::to_value(value)?))
    }

    /// Create a data packet from a string or string reference
    #[inline]
    pub fn from_string(s: &str) -> Self {
        Self::new(serde_json::Value::String(s.to_string()))
    }

    /// Create an object data packet with a single key-value pair
    #[inline]
    pub fn singleton(key: &str, value: serde_json::Value) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(key.to_string(), value);
        Self::new(serde_json::Value::Object(map))
    }
}

impl From<serde_json::Value> for DataPacket {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}

impl From<&str> for DataPacket {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for DataPacket {
    fn from(s: String) -> Self {
        Self::new(serde_json::Value::String(s))
    }
}

impl From<bool> for DataPacket {
    fn from(b: bool) -> Self {
        Self::new(serde_json::Value::Bool(b))
    }
}

impl From<i64> for DataPacket {
    fn from(n: i64) -> Self {
        Self::new(serde_json::Value::from(n))
    }
}

impl std::str::FromStr for DataPacket {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(serde_json::Value::String(s.to_string())))
    }
}
