///
/// querybridge - The Result-Set Cursor Bridge
///
/// This crate marshals a forward-only, columnar database result set
/// into the dynamic value model of an embedding scripting runtime. It
/// includes:
///
/// - field: column type tags, the tagged-union field value, coercion
/// - result_set: materialized result storage, validated at construction
/// - cursor: the forward-only cursor and its typed accessors
/// - value: the dynamic scalar model and row snapshots
/// - error: caller-attributable error types
///
/// Entry points:
/// - `ResultSet::new`: wrap an already-executed query result
/// - `ResultCursor::new`: traverse it; the first row is current
///   immediately, `next_row` moves forward, `get_row` snapshots the
///   current row keyed by column name
///
/// The database driver that produces result sets and the runtime that
/// consumes dynamic values are external collaborators; this crate is
/// the boundary between them.
///

pub mod cursor;
pub mod error;
pub mod field;
pub mod result_set;
pub mod value;

pub use cursor::ResultCursor;
pub use error::BridgeError;
pub use field::{Field, FieldType};
pub use result_set::{Column, ResultSet};
pub use value::{RowObject, ScriptValue};

#[test]
fn test_two_column_scenario() {
    // result set with ("id" int32, "label" text), rows [(1,"a"),(2,"b")]
    let set = ResultSet::new(
        vec![
            Column::new("id", FieldType::Int32),
            Column::new("label", FieldType::Text),
        ],
        vec![
            vec![Field::Int32(1), Field::Text("a".to_string())],
            vec![Field::Int32(2), Field::Text("b".to_string())],
        ],
    )
    .unwrap();

    let mut cursor = ResultCursor::new(&set);
    assert_eq!(cursor.column_count(), 2);

    let row = cursor.get_row().unwrap();
    assert_eq!(row["id"], ScriptValue::Double(1.0));
    assert_eq!(row["label"], ScriptValue::Text("a".to_string()));

    assert!(cursor.next_row());
    let row = cursor.get_row().unwrap();
    assert_eq!(row["id"], ScriptValue::Double(2.0));
    assert_eq!(row["label"], ScriptValue::Text("b".to_string()));

    assert!(!cursor.next_row());
    assert_eq!(cursor.get_row().unwrap_err(), BridgeError::NoCurrentRow);
}
