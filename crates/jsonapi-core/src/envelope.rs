//! The `{message, data}` wire envelope
//!
//! Every response body produced by this crate has exactly this shape:
//!
//! ```json
//! { "message": "Widget created", "data": { "id": 42 } }
//! ```
//!
//! The status code is never duplicated into the body; it travels on the
//! status line. `data` must serialize to a JSON object or array and defaults
//! to `{}`.

use crate::error::{EnvelopeError, Result};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// The standard response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    /// Human-readable message, empty by default
    pub message: String,
    /// Payload, an object or array
    pub data: T,
}

impl<T> Envelope<T> {
    /// Create an envelope with a message and a payload.
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// Replace the payload, keeping the message.
    pub fn with_data<U>(self, data: U) -> Envelope<U> {
        Envelope {
            message: self.message,
            data,
        }
    }
}

impl Envelope<Value> {
    /// `{"message":"","data":{}}`
    pub fn empty() -> Self {
        Self::default()
    }

    /// An envelope with a message and an empty `{}` payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(message, empty_data())
    }
}

impl Default for Envelope<Value> {
    fn default() -> Self {
        Self::new(String::new(), empty_data())
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serialize into the normalized `Envelope<Value>`.
    ///
    /// Fails with [`EnvelopeError::Serialization`] when the payload cannot be
    /// represented as JSON, and with [`EnvelopeError::InvalidData`] when it is
    /// not an object or array.
    pub fn into_value(self) -> Result<Envelope<Value>> {
        let data = serde_json::to_value(&self.data)?;
        check_collection(&data)?;
        Ok(Envelope {
            message: self.message,
            data,
        })
    }

    /// Serialize to compact JSON bytes.
    ///
    /// The payload goes through [`Value`] first, so object keys are emitted
    /// in sorted order whatever map type the caller used.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let data = serde_json::to_value(&self.data)?;
        check_collection(&data)?;
        let body = serde_json::to_vec(&WireEnvelope {
            message: &self.message,
            data: &data,
        })?;
        Ok(Bytes::from(body))
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parse an envelope from a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

// Borrowed form of `Envelope<Value>`; field order is the wire order.
#[derive(Serialize)]
struct WireEnvelope<'a> {
    message: &'a str,
    data: &'a Value,
}

/// The default payload, an empty JSON object.
pub fn empty_data() -> Value {
    Value::Object(Map::new())
}

fn check_collection(data: &Value) -> Result<()> {
    match data {
        Value::Object(_) | Value::Array(_) => Ok(()),
        Value::Null => Err(EnvelopeError::InvalidData("null")),
        Value::Bool(_) => Err(EnvelopeError::InvalidData("boolean")),
        Value::Number(_) => Err(EnvelopeError::InvalidData("number")),
        Value::String(_) => Err(EnvelopeError::InvalidData("string")),
    }
}
