///
/// Forward-Only Result Cursor
///
/// This module implements the traversal object handed to the
/// scripting caller. The cursor borrows an already-executed result
/// set and owns nothing but its position, modeled as an explicit
/// state machine so exhaustion is a first-class state rather than an
/// out-of-bounds condition.
///
/// Key contracts:
/// - the first row is current at creation; next_row() moves forward
/// - once next_row() reports exhaustion the cursor stays exhausted
/// - every field accessor validates the column index before touching
///   storage or state
/// - typed accessors coerce; they never fail on type mismatch or null
///

use crate::error::BridgeError;
use crate::field::{Field, FieldType};
use crate::result_set::ResultSet;
use crate::value::{RowObject, ScriptValue};
use tracing::trace;

/// Cursor position. Exhausted is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Positioned(usize),
    Exhausted,
}

/// Forward-only, single-position traversal over a [`ResultSet`].
///
/// Not safe for simultaneous use from multiple threads without
/// external exclusion; position is mutable state with no internal
/// locking. Cursors over distinct sets are independent.
#[derive(Debug)]
pub struct ResultCursor<'a> {
    set: &'a ResultSet,
    state: CursorState,
}

impl<'a> ResultCursor<'a> {
    /// Positions the cursor on the first row, or starts exhausted when
    /// the set is empty.
    pub fn new(set: &'a ResultSet) -> Self {
        let state = if set.row_count() > 0 {
            CursorState::Positioned(0)
        } else {
            CursorState::Exhausted
        };
        Self { set, state }
    }

    /// Number of columns in the result set.
    pub fn column_count(&self) -> u32 {
        self.set.field_count()
    }

    /// Number of rows, saturated to `u32::MAX` when the true count
    /// exceeds the 32-bit range.
    pub fn row_count(&self) -> u32 {
        saturate_row_count(self.set.row_count())
    }

    /// Name of the column at `index`.
    pub fn field_name(&self, index: u32) -> Result<&str, BridgeError> {
        self.set.field_name(index)
    }

    /// Declared type of the column at `index`.
    pub fn field_type(&self, index: u32) -> Result<FieldType, BridgeError> {
        self.set.field_type(index)
    }

    /// Whether the current row's field at `index` is null.
    pub fn is_null(&self, index: u32) -> Result<bool, BridgeError> {
        Ok(self.field(index)?.is_null())
    }

    pub fn get_bool(&self, index: u32) -> Result<bool, BridgeError> {
        Ok(self.field(index)?.to_bool())
    }

    pub fn get_int8(&self, index: u32) -> Result<i8, BridgeError> {
        Ok(self.field(index)?.to_i64() as i8)
    }

    pub fn get_int16(&self, index: u32) -> Result<i16, BridgeError> {
        Ok(self.field(index)?.to_i64() as i16)
    }

    pub fn get_int32(&self, index: u32) -> Result<i32, BridgeError> {
        Ok(self.field(index)?.to_i64() as i32)
    }

    pub fn get_int64(&self, index: u32) -> Result<i64, BridgeError> {
        Ok(self.field(index)?.to_i64())
    }

    pub fn get_uint8(&self, index: u32) -> Result<u8, BridgeError> {
        Ok(self.field(index)?.to_u64() as u8)
    }

    pub fn get_uint16(&self, index: u32) -> Result<u16, BridgeError> {
        Ok(self.field(index)?.to_u64() as u16)
    }

    pub fn get_uint32(&self, index: u32) -> Result<u32, BridgeError> {
        Ok(self.field(index)?.to_u64() as u32)
    }

    pub fn get_uint64(&self, index: u32) -> Result<u64, BridgeError> {
        Ok(self.field(index)?.to_u64())
    }

    pub fn get_float(&self, index: u32) -> Result<f32, BridgeError> {
        Ok(self.field(index)?.to_f64() as f32)
    }

    pub fn get_double(&self, index: u32) -> Result<f64, BridgeError> {
        Ok(self.field(index)?.to_f64())
    }

    pub fn get_string(&self, index: u32) -> Result<String, BridgeError> {
        Ok(self.field(index)?.to_text())
    }

    /// The current field as a dynamic scalar of the column's declared
    /// width, or `Null` for a null field. This is the typed push path
    /// the dispatch layer uses.
    pub fn get_value(&self, index: u32) -> Result<ScriptValue, BridgeError> {
        let field = self.field(index)?;
        if field.is_null() {
            return Ok(ScriptValue::Null);
        }
        let value = match self.set.field_type(index)? {
            FieldType::Bool => ScriptValue::from(field.to_bool()),
            FieldType::Int8 => ScriptValue::from(field.to_i64() as i8),
            FieldType::Int16 => ScriptValue::from(field.to_i64() as i16),
            FieldType::Int32 => ScriptValue::from(field.to_i64() as i32),
            FieldType::Int64 => ScriptValue::from(field.to_i64()),
            FieldType::UInt8 => ScriptValue::from(field.to_u64() as u8),
            FieldType::UInt16 => ScriptValue::from(field.to_u64() as u16),
            FieldType::UInt32 => ScriptValue::from(field.to_u64() as u32),
            FieldType::UInt64 => ScriptValue::from(field.to_u64()),
            FieldType::Float => ScriptValue::from(field.to_f64() as f32),
            FieldType::Double => ScriptValue::from(field.to_f64()),
            FieldType::Text => ScriptValue::from(field.to_text()),
        };
        Ok(value)
    }

    /// Advances to the next row. Returns `true` while a row is
    /// available, `false` once the set is exhausted; exhaustion is
    /// permanent.
    ///
    /// The first row is already current when the cursor is created.
    /// Calling `next_row` before reading it skips it — this ordering
    /// is part of the contract.
    pub fn next_row(&mut self) -> bool {
        match self.state {
            CursorState::Positioned(i) => {
                if self.set.row(i + 1).is_some() {
                    self.state = CursorState::Positioned(i + 1);
                    true
                } else {
                    trace!(row = i, "cursor exhausted");
                    self.state = CursorState::Exhausted;
                    false
                }
            }
            CursorState::Exhausted => false,
        }
    }

    /// Builds the whole-row snapshot keyed by column name.
    ///
    /// Columns declared as signed integers or floats become numbers by
    /// parsing their canonical text form; the uniform text-then-parse
    /// path normalizes encodings the dynamic number type cannot hold
    /// natively. Everything else, including bool and the unsigned
    /// widths, stays text. Null fields map to the null marker, never
    /// to zero.
    pub fn get_row(&self) -> Result<RowObject, BridgeError> {
        let row = self.current_row()?;
        let mut object = RowObject::with_capacity(row.len());
        for (field, column) in row.iter().zip(self.set.columns()) {
            let value = if field.is_null() {
                ScriptValue::Null
            } else if column.field_type.is_numeric() {
                ScriptValue::Double(field.to_text().parse::<f64>().unwrap_or(0.0))
            } else {
                ScriptValue::Text(field.to_text())
            };
            object.insert(column.name.clone(), value);
        }
        Ok(object)
    }

    /// The shared bounds guard: every accessor goes through here
    /// before any storage or state access.
    fn validate_column(&self, index: u32) -> Result<(), BridgeError> {
        let count = self.set.field_count();
        if index >= count {
            return Err(BridgeError::column_out_of_range(index, count));
        }
        Ok(())
    }

    fn current_row(&self) -> Result<&'a [Field], BridgeError> {
        match self.state {
            CursorState::Positioned(i) => {
                self.set.row(i).ok_or(BridgeError::NoCurrentRow)
            }
            CursorState::Exhausted => Err(BridgeError::NoCurrentRow),
        }
    }

    fn field(&self, index: u32) -> Result<&'a Field, BridgeError> {
        self.validate_column(index)?;
        let row = self.current_row()?;
        Ok(&row[index as usize])
    }
}

/// Saturating 64-to-32-bit row count conversion.
fn saturate_row_count(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
