//! Record type.

use serde::Serialize;
use serde_json::{Map, Value};

/// One element of the input array: an untyped mapping from string keys to
/// arbitrary JSON values.
///
/// Key order is preserved from the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the record contains `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts a field, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Consumes the record, returning it as a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        record.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_lookup_returns_none_when_absent() {
        let mut record = Record::new();
        record.insert("Name", json!("Ann"));

        assert_eq!(record.field("Name"), Some(&json!("Ann")));
        assert_eq!(record.field("PLZ"), None);
        assert!(record.contains("Name"));
    }

    #[test]
    fn test_serializes_as_plain_object_in_insertion_order() {
        let mut record = Record::new();
        record.insert("zeta", json!(1));
        record.insert("alpha", json!(2));

        let json = serde_json::to_string(&record).expect("serialization should work");
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }
}
