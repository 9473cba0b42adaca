///
/// Dynamic Value Model
///
/// This module defines the closed set of value kinds the bridge hands
/// to the embedding runtime: null, bool, each integer width, both
/// float widths, and text. The runtime's own stack/value machinery is
/// an external collaborator; ScriptValue is the bridge's side of that
/// contract.
///
/// Serializes untagged, so a row snapshot renders as a plain object:
/// `{ "entry": 123.0, "name": "Foo" }`.
///

use indexmap::IndexMap;
use serde::Serialize;

/// A scalar the embedding runtime can accept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float(f32),
    Double(f64),
    Text(String),
}

impl ScriptValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScriptValue::Null)
    }
}

impl From<bool> for ScriptValue {
    fn from(v: bool) -> Self {
        ScriptValue::Bool(v)
    }
}

impl From<i8> for ScriptValue {
    fn from(v: i8) -> Self {
        ScriptValue::Int8(v)
    }
}

impl From<i16> for ScriptValue {
    fn from(v: i16) -> Self {
        ScriptValue::Int16(v)
    }
}

impl From<i32> for ScriptValue {
    fn from(v: i32) -> Self {
        ScriptValue::Int32(v)
    }
}

impl From<i64> for ScriptValue {
    fn from(v: i64) -> Self {
        ScriptValue::Int64(v)
    }
}

impl From<u8> for ScriptValue {
    fn from(v: u8) -> Self {
        ScriptValue::UInt8(v)
    }
}

impl From<u16> for ScriptValue {
    fn from(v: u16) -> Self {
        ScriptValue::UInt16(v)
    }
}

impl From<u32> for ScriptValue {
    fn from(v: u32) -> Self {
        ScriptValue::UInt32(v)
    }
}

impl From<u64> for ScriptValue {
    fn from(v: u64) -> Self {
        ScriptValue::UInt64(v)
    }
}

impl From<f32> for ScriptValue {
    fn from(v: f32) -> Self {
        ScriptValue::Float(v)
    }
}

impl From<f64> for ScriptValue {
    fn from(v: f64) -> Self {
        ScriptValue::Double(v)
    }
}

impl From<String> for ScriptValue {
    fn from(v: String) -> Self {
        ScriptValue::Text(v)
    }
}

impl From<&str> for ScriptValue {
    fn from(v: &str) -> Self {
        ScriptValue::Text(v.to_string())
    }
}

/// Whole-row snapshot: column name to dynamic value, in column order.
/// Lookup is by name; enumeration order is not contractual.
pub type RowObject = IndexMap<String, ScriptValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scalars() {
        assert_eq!(ScriptValue::from(true), ScriptValue::Bool(true));
        assert_eq!(ScriptValue::from(7i16), ScriptValue::Int16(7));
        assert_eq!(ScriptValue::from(7u64), ScriptValue::UInt64(7));
        assert_eq!(ScriptValue::from("x"), ScriptValue::Text("x".to_string()));
        assert!(ScriptValue::Null.is_null());
    }

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(serde_json::to_string(&ScriptValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&ScriptValue::Int32(123)).unwrap(), "123");
        assert_eq!(
            serde_json::to_string(&ScriptValue::Text("Foo".to_string())).unwrap(),
            "\"Foo\""
        );
    }

    #[test]
    fn test_row_object_serializes_as_object() {
        let mut row = RowObject::new();
        row.insert("entry".to_string(), ScriptValue::Double(123.0));
        row.insert("name".to_string(), ScriptValue::Text("Foo".to_string()));
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            "{\"entry\":123.0,\"name\":\"Foo\"}"
        );
    }
}
