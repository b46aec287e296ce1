//! `serde_json` implementation of the codec port.

use jsort_application::ports::{CodecError, JsonCodec};
use jsort_domain::Record;
use serde_json::Value;

use super::json::{from_json_bytes, to_json_pretty_bytes};

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonCodec;

impl SerdeJsonCodec {
    /// Creates a new `SerdeJsonCodec`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl JsonCodec for SerdeJsonCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        from_json_bytes(bytes).map_err(|err| CodecError::Decode(err.to_string()))
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>, CodecError> {
        to_json_pretty_bytes(records).map_err(|err| CodecError::Encode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_reports_position() {
        let err = SerdeJsonCodec::new()
            .decode(b"{not valid json")
            .expect_err("should not decode");
        assert!(err.to_string().contains("line 1 column 2"));
    }

    #[test]
    fn test_encode_records_as_indented_array() {
        let mut ann = Record::new();
        ann.insert("Name", json!("Ann"));
        ann.insert("PLZ", json!(12345));

        let bytes = SerdeJsonCodec::new().encode(&[ann]).expect("should encode");
        assert_eq!(
            String::from_utf8(bytes).expect("utf-8"),
            "[\n  {\n    \"Name\": \"Ann\",\n    \"PLZ\": 12345\n  }\n]"
        );
    }
}
