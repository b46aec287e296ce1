//! JSON codec port.

use jsort_domain::Record;
use serde_json::Value;

/// Error type for codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input bytes are not a well-formed JSON document.
    #[error("{0}")]
    Decode(String),

    /// Records could not be encoded.
    #[error("{0}")]
    Encode(String),
}

/// Decodes input documents and encodes sorted output.
pub trait JsonCodec: Send + Sync {
    /// Parses raw bytes into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the bytes are not valid UTF-8 JSON.
    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError>;

    /// Renders records as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `Encode` if serialization fails.
    fn encode(&self, records: &[Record]) -> Result<Vec<u8>, CodecError>;
}
