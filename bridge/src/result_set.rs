///
/// Materialized Result Set
///
/// This module defines the storage the cursor traverses: column
/// metadata plus fully materialized rows. The driver side builds a
/// ResultSet once execution completes; metadata is immutable from
/// then on.
///
/// Construction is the only mutation point, so both structural
/// invariants are enforced there:
/// - every row has exactly one field per column
/// - every non-null field matches its column's declared type
///

use crate::error::BridgeError;
use crate::field::{Field, FieldType};
use tracing::debug;

/// A column: name and declared type, fixed by the originating query's
/// schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub field_type: FieldType,
}

impl Column {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// An already-executed query result: ordered columns, ordered rows.
///
/// The set is fully materialized before a cursor ever sees it;
/// streaming fetch from the wire is the driver's concern.
#[derive(Debug, Clone)]
pub struct ResultSet {
    columns: Vec<Column>,
    rows: Vec<Vec<Field>>,
}

impl ResultSet {
    /// Builds a result set, validating row arity and columnar
    /// homogeneity.
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Field>>) -> Result<Self, BridgeError> {
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(BridgeError::RowWidthMismatch {
                    row: row_idx,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            for (col_idx, (field, column)) in row.iter().zip(&columns).enumerate() {
                if !field.matches(column.field_type) {
                    return Err(BridgeError::ColumnTypeMismatch {
                        row: row_idx,
                        column: col_idx,
                        expected: column.field_type,
                        // matches() only fails for non-null fields
                        found: field.field_type().unwrap_or(column.field_type),
                    });
                }
            }
        }
        debug!(
            columns = columns.len(),
            rows = rows.len(),
            "materialized result set"
        );
        Ok(Self { columns, rows })
    }

    /// An empty result set still carries its column metadata.
    pub fn empty(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn field_count(&self) -> u32 {
        self.columns.len() as u32
    }

    pub fn field_name(&self, index: u32) -> Result<&str, BridgeError> {
        self.column(index).map(|c| c.name.as_str())
    }

    pub fn field_type(&self, index: u32) -> Result<FieldType, BridgeError> {
        self.column(index).map(|c| c.field_type)
    }

    /// True row count. May exceed what a 32-bit caller can represent;
    /// the cursor saturates it at that boundary.
    pub fn row_count(&self) -> u64 {
        self.rows.len() as u64
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn row(&self, index: usize) -> Option<&[Field]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    fn column(&self, index: u32) -> Result<&Column, BridgeError> {
        self.columns
            .get(index as usize)
            .ok_or(BridgeError::ColumnOutOfRange {
                index,
                count: self.field_count(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", FieldType::Int32),
            Column::new("label", FieldType::Text),
        ]
    }

    #[test]
    fn test_valid_construction() {
        let set = ResultSet::new(
            columns(),
            vec![
                vec![Field::Int32(1), Field::Text("a".to_string())],
                vec![Field::Null, Field::Text("b".to_string())],
            ],
        )
        .unwrap();
        assert_eq!(set.field_count(), 2);
        assert_eq!(set.row_count(), 2);
        assert_eq!(set.field_name(0).unwrap(), "id");
        assert_eq!(set.field_type(1).unwrap(), FieldType::Text);
    }

    #[test]
    fn test_rejects_ragged_row() {
        let err = ResultSet::new(columns(), vec![vec![Field::Int32(1)]]).unwrap_err();
        assert_eq!(
            err,
            BridgeError::RowWidthMismatch {
                row: 0,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_rejects_heterogeneous_column() {
        let err = ResultSet::new(
            columns(),
            vec![vec![Field::Text("1".to_string()), Field::Text("a".to_string())]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BridgeError::ColumnTypeMismatch {
                row: 0,
                column: 0,
                expected: FieldType::Int32,
                found: FieldType::Text,
            }
        );
    }

    #[test]
    fn test_metadata_bounds() {
        let set = ResultSet::empty(columns());
        assert!(set.field_name(2).is_err());
        assert_eq!(
            set.field_type(5).unwrap_err(),
            BridgeError::ColumnOutOfRange { index: 5, count: 2 }
        );
    }
}
