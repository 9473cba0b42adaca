///
/// Field Types and Coercion
///
/// This module defines the columnar storage model: a closed tag enum
/// for declared column types and a tagged-union field value. Every
/// coercion decision the bridge makes lives here.
///
/// Coercion policy:
/// - numeric to numeric: standard narrowing/widening (`as` casts)
/// - numeric to text: canonical decimal form
/// - text to numeric: decimal parse, zero value when unparsable
/// - null through any funnel: the requested type's zero/empty value
///
/// Coercion never fails. The only fallible bridge operations are index
/// and cursor-state validation, which happen in the cursor.
///

use serde::Serialize;
use std::fmt;

/// Declared type of a column, fixed at execution time for every row
/// (columnar homogeneity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    Text,
}

impl FieldType {
    /// Name used in error messages and serialized metadata.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::Int8 => "int8",
            FieldType::Int16 => "int16",
            FieldType::Int32 => "int32",
            FieldType::Int64 => "int64",
            FieldType::UInt8 => "uint8",
            FieldType::UInt16 => "uint16",
            FieldType::UInt32 => "uint32",
            FieldType::UInt64 => "uint64",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Text => "text",
        }
    }

    /// Whether a whole-row snapshot renders this column as a number.
    ///
    /// Only signed integers and floats qualify. Unsigned widths, bool,
    /// and text stay textual: the dynamic numeric type cannot represent
    /// large 64-bit magnitudes exactly, and downstream callers depend
    /// on the text forms. This asymmetry is contractual.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FieldType::Int8
                | FieldType::Int16
                | FieldType::Int32
                | FieldType::Int64
                | FieldType::Float
                | FieldType::Double
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single stored value: one payload variant per column type, plus
/// the null variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
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

impl Field {
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Tag of a non-null value. Null carries no type of its own; its
    /// column's declared type lives in the schema.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Field::Null => None,
            Field::Bool(_) => Some(FieldType::Bool),
            Field::Int8(_) => Some(FieldType::Int8),
            Field::Int16(_) => Some(FieldType::Int16),
            Field::Int32(_) => Some(FieldType::Int32),
            Field::Int64(_) => Some(FieldType::Int64),
            Field::UInt8(_) => Some(FieldType::UInt8),
            Field::UInt16(_) => Some(FieldType::UInt16),
            Field::UInt32(_) => Some(FieldType::UInt32),
            Field::UInt64(_) => Some(FieldType::UInt64),
            Field::Float(_) => Some(FieldType::Float),
            Field::Double(_) => Some(FieldType::Double),
            Field::Text(_) => Some(FieldType::Text),
        }
    }

    /// Homogeneity predicate: a null field belongs to any column.
    pub fn matches(&self, ty: FieldType) -> bool {
        match self.field_type() {
            None => true,
            Some(own) => own == ty,
        }
    }

    /// Signed integer funnel. Narrower accessors truncate the result.
    pub fn to_i64(&self) -> i64 {
        match self {
            Field::Null => 0,
            Field::Bool(b) => *b as i64,
            Field::Int8(v) => *v as i64,
            Field::Int16(v) => *v as i64,
            Field::Int32(v) => *v as i64,
            Field::Int64(v) => *v,
            Field::UInt8(v) => *v as i64,
            Field::UInt16(v) => *v as i64,
            Field::UInt32(v) => *v as i64,
            Field::UInt64(v) => *v as i64,
            Field::Float(v) => *v as i64,
            Field::Double(v) => *v as i64,
            Field::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
        }
    }

    /// Unsigned integer funnel.
    pub fn to_u64(&self) -> u64 {
        match self {
            Field::Null => 0,
            Field::Bool(b) => *b as u64,
            Field::Int8(v) => *v as u64,
            Field::Int16(v) => *v as u64,
            Field::Int32(v) => *v as u64,
            Field::Int64(v) => *v as u64,
            Field::UInt8(v) => *v as u64,
            Field::UInt16(v) => *v as u64,
            Field::UInt32(v) => *v as u64,
            Field::UInt64(v) => *v,
            Field::Float(v) => *v as u64,
            Field::Double(v) => *v as u64,
            Field::Text(s) => s.trim().parse::<u64>().unwrap_or(0),
        }
    }

    /// Floating-point funnel.
    pub fn to_f64(&self) -> f64 {
        match self {
            Field::Null => 0.0,
            Field::Bool(b) => *b as u8 as f64,
            Field::Int8(v) => *v as f64,
            Field::Int16(v) => *v as f64,
            Field::Int32(v) => *v as f64,
            Field::Int64(v) => *v as f64,
            Field::UInt8(v) => *v as f64,
            Field::UInt16(v) => *v as f64,
            Field::UInt32(v) => *v as f64,
            Field::UInt64(v) => *v as f64,
            Field::Float(v) => *v as f64,
            Field::Double(v) => *v,
            Field::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }

    pub fn to_bool(&self) -> bool {
        match self {
            Field::Null => false,
            Field::Bool(b) => *b,
            Field::Text(s) => s == "1" || s.eq_ignore_ascii_case("true"),
            Field::Float(v) => *v != 0.0,
            Field::Double(v) => *v != 0.0,
            _ => self.to_i64() != 0,
        }
    }

    /// Canonical text form: decimal for numerics, "1"/"0" for bool,
    /// empty for null.
    pub fn to_text(&self) -> String {
        match self {
            Field::Null => String::new(),
            Field::Bool(b) => String::from(if *b { "1" } else { "0" }),
            Field::Int8(v) => v.to_string(),
            Field::Int16(v) => v.to_string(),
            Field::Int32(v) => v.to_string(),
            Field::Int64(v) => v.to_string(),
            Field::UInt8(v) => v.to_string(),
            Field::UInt16(v) => v.to_string(),
            Field::UInt32(v) => v.to_string(),
            Field::UInt64(v) => v.to_string(),
            Field::Float(v) => v.to_string(),
            Field::Double(v) => v.to_string(),
            Field::Text(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_classification() {
        assert!(FieldType::Int8.is_numeric());
        assert!(FieldType::Int64.is_numeric());
        assert!(FieldType::Float.is_numeric());
        assert!(FieldType::Double.is_numeric());
        assert!(!FieldType::UInt8.is_numeric());
        assert!(!FieldType::UInt64.is_numeric());
        assert!(!FieldType::Bool.is_numeric());
        assert!(!FieldType::Text.is_numeric());
    }

    #[test]
    fn test_null_coerces_to_zero_values() {
        let f = Field::Null;
        assert_eq!(f.to_i64(), 0);
        assert_eq!(f.to_u64(), 0);
        assert_eq!(f.to_f64(), 0.0);
        assert!(!f.to_bool());
        assert_eq!(f.to_text(), "");
    }

    #[test]
    fn test_widening_and_narrowing() {
        let f = Field::Int16(-300);
        assert_eq!(f.to_i64(), -300);
        assert_eq!(f.to_i64() as i8, -44); // truncation, not saturation
        let f = Field::UInt64(u64::MAX);
        assert_eq!(f.to_i64(), -1);
    }

    #[test]
    fn test_text_parses_as_number() {
        let f = Field::Text("123".to_string());
        assert_eq!(f.to_i64(), 123);
        assert_eq!(f.to_f64(), 123.0);
        let f = Field::Text("2.5".to_string());
        assert_eq!(f.to_f64(), 2.5);
    }

    #[test]
    fn test_unparsable_text_yields_zero() {
        let f = Field::Text("not a number".to_string());
        assert_eq!(f.to_i64(), 0);
        assert_eq!(f.to_u64(), 0);
        assert_eq!(f.to_f64(), 0.0);
    }

    #[test]
    fn test_bool_coercions() {
        assert!(Field::Text("true".to_string()).to_bool());
        assert!(Field::Text("1".to_string()).to_bool());
        assert!(!Field::Text("0".to_string()).to_bool());
        assert!(!Field::Text("yes".to_string()).to_bool());
        assert!(Field::Int32(-5).to_bool());
        assert!(!Field::Int32(0).to_bool());
        assert_eq!(Field::Bool(true).to_text(), "1");
        assert_eq!(Field::Bool(false).to_text(), "0");
    }

    #[test]
    fn test_canonical_text_round_trip() {
        let f = Field::Int32(-42);
        assert_eq!(f.to_text().parse::<i64>().unwrap(), f.to_i64());
        let f = Field::Double(3.25);
        assert_eq!(f.to_text().parse::<f64>().unwrap(), f.to_f64());
        let f = Field::UInt64(u64::MAX);
        assert_eq!(f.to_text(), "18446744073709551615");
    }

    #[test]
    fn test_field_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FieldType::Int32).unwrap(), "\"int32\"");
        assert_eq!(serde_json::to_string(&FieldType::UInt64).unwrap(), "\"uint64\"");
    }

    #[test]
    fn test_null_matches_every_column_type() {
        assert!(Field::Null.matches(FieldType::Int32));
        assert!(Field::Null.matches(FieldType::Text));
        assert!(Field::Int32(1).matches(FieldType::Int32));
        assert!(!Field::Int32(1).matches(FieldType::Int64));
    }
}
