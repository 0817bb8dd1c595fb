//! Key order of records read from the data file.
//!
//! Records are written back with the keys they were read with in their
//! original positions, so a rewrite only touches the values that changed.

use serde::de::{self, DeserializeOwned};
use serde::ser::{self, Serialize, Serializer};
use serde_json::{Map, Value};

/// Key order of a JSON object as it was read.
///
/// Empty for records built in code, which keep their declared field order.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyOrder(Vec<String>);

impl KeyOrder {
    pub(crate) fn of(object: &Map<String, Value>) -> Self {
        Self(object.keys().cloned().collect())
    }

    /// Reorders `fields` to the recorded order. Keys the record was not read
    /// with follow in their own order.
    pub(crate) fn arrange(&self, fields: Map<String, Value>) -> Map<String, Value> {
        if self.0.is_empty() {
            return fields;
        }

        let mut arranged = Map::new();
        for key in &self.0 {
            if let Some(value) = fields.get(key) {
                arranged.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in fields {
            if !arranged.contains_key(&key) {
                arranged.insert(key, value);
            }
        }
        arranged
    }
}

/// Decodes a record from an object already read off the wire.
pub(crate) fn read_record<T, E>(object: Map<String, Value>) -> Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    serde_json::from_value(Value::Object(object)).map_err(E::custom)
}

/// Serializes `record` with its keys in `order`.
pub(crate) fn write_record<T, S>(record: &T, order: &KeyOrder, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match serde_json::to_value(record).map_err(ser::Error::custom)? {
        Value::Object(fields) => order.arrange(fields).serialize(serializer),
        other => other.serialize(serializer),
    }
}
