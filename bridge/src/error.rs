///
/// Bridge Error Types
///
/// This module defines the error type for every fallible bridge
/// operation. Errors are caller-attributable and scoped to the single
/// failing call; no error mutates cursor or result-set state.
///
/// Error categories:
/// - ColumnOutOfRange: column index not in [0, field count)
/// - NoCurrentRow: field access with no current row
/// - RowWidthMismatch: a row handed to ResultSet::new has the wrong arity
/// - ColumnTypeMismatch: a field value disagrees with its column's type
///
/// Unparsable text-to-number coercions are not errors: accessors
/// substitute the zero value instead (see Field).
///

use crate::field::FieldType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// The column index is outside the result set. The message wording
    /// (index, available count, zero-based note) is part of the
    /// observable contract.
    #[error("trying to access invalid field index {index}. There are {count} fields available and the indexes start from 0")]
    ColumnOutOfRange { index: u32, count: u32 },

    /// Field access after the cursor reported exhaustion, or over an
    /// empty result set.
    #[error("no current row: the cursor is exhausted")]
    NoCurrentRow,

    /// Construction-time: a row's field count does not match the
    /// column count.
    #[error("row {row} has {found} fields, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Construction-time: a non-null field's type does not match the
    /// column's declared type.
    #[error("row {row}, column {column}: declared type is {expected}, found a {found} value")]
    ColumnTypeMismatch {
        row: usize,
        column: usize,
        expected: FieldType,
        found: FieldType,
    },
}

impl BridgeError {
    pub fn column_out_of_range(index: u32, count: u32) -> Self {
        BridgeError::ColumnOutOfRange { index, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = BridgeError::column_out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "trying to access invalid field index 7. There are 3 fields available and the indexes start from 0"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = BridgeError::ColumnTypeMismatch {
            row: 2,
            column: 1,
            expected: FieldType::Int32,
            found: FieldType::Text,
        };
        assert_eq!(
            err.to_string(),
            "row 2, column 1: declared type is int32, found a text value"
        );
    }
}
