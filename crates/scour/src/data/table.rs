//! Rows, datasets, and shared row-level helpers.

use indexmap::IndexMap;

use crate::error::{Result, ScourError};

use super::Value;

/// A single row: an insertion-ordered mapping from column name to value.
///
/// All rows of a dataset are expected to share the first row's column set;
/// an absent key is treated as a missing value.
pub type Row = IndexMap<String, Value>;

/// Column names for a dataset. The first row's keys define the schema.
pub fn column_names(rows: &[Row]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Iterate the values present in a column, skipping rows without the key.
pub fn column_values<'a>(rows: &'a [Row], column: &'a str) -> impl Iterator<Item = &'a Value> {
    rows.iter().filter_map(move |row| row.get(column))
}

/// Collect the numeric (non-NaN) values in a column, in row order.
pub fn numeric_column_values(rows: &[Row], column: &str) -> Vec<f64> {
    column_values(rows, column)
        .filter_map(Value::as_number)
        .collect()
}

/// Order-sensitive serialization of a full row.
///
/// Two rows are exact duplicates iff their keys are equal. Shared by the
/// duplicate detector and the duplicate cleaner so the two cannot disagree
/// on what counts as "the same row".
pub fn row_key(row: &Row) -> String {
    // Rows hold string keys and scalar values only; serialization cannot fail.
    serde_json::to_string(row).unwrap_or_default()
}

/// Convert a parsed JSON value into rows.
///
/// This is the boundary through which the ingestion collaborator hands
/// data to the core: a JSON array of flat objects, one object per row.
/// Nested arrays/objects inside a cell are rejected — type coercion and
/// flattening are the ingestion layer's job.
pub fn rows_from_json(json: serde_json::Value) -> Result<Vec<Row>> {
    let serde_json::Value::Array(items) = json else {
        return Err(ScourError::InvalidRow {
            index: 0,
            message: "expected a JSON array of row objects".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let serde_json::Value::Object(fields) = item else {
                return Err(ScourError::InvalidRow {
                    index,
                    message: format!("expected a JSON object, got {item}"),
                });
            };

            fields
                .into_iter()
                .map(|(column, cell)| Ok((column.clone(), cell_from_json(index, &column, cell)?)))
                .collect()
        })
        .collect()
}

fn cell_from_json(index: usize, column: &str, cell: serde_json::Value) -> Result<Value> {
    match cell {
        serde_json::Value::Null => Ok(Value::Missing),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => Ok(Value::Number(n.as_f64().unwrap_or(f64::NAN))),
        serde_json::Value::String(s) => Ok(Value::Text(s)),
        nested => Err(ScourError::InvalidRow {
            index,
            message: format!("column '{column}' holds nested JSON: {nested}"),
        }),
    }
}
