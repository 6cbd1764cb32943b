//! Missing-value fills for a single column.

use indexmap::IndexMap;

use crate::data::{numeric_column_values, Row, Value};
use crate::stats;
use crate::transform::{FillMissingConfig, FillStrategy};

/// Result of a fill operation.
///
/// `warning` is set when the configuration could not produce a fill value
/// (constant strategy without a constant, or an aggregate over a column
/// with nothing to aggregate); the rows are then an unchanged copy of the
/// input. This keeps a degenerate configuration distinguishable from a
/// legitimate "nothing was missing" pass.
#[derive(Debug, Clone)]
pub struct FillOutcome {
    /// The resulting dataset.
    pub rows: Vec<Row>,
    /// Why the fill was a no-op, when it was one.
    pub warning: Option<String>,
}

impl FillOutcome {
    fn filled(rows: Vec<Row>) -> Self {
        Self {
            rows,
            warning: None,
        }
    }

    fn unchanged(rows: &[Row], warning: String) -> Self {
        Self {
            rows: rows.to_vec(),
            warning: Some(warning),
        }
    }
}

/// Fill missing values in the target column.
///
/// Missing cells are identified by the shared missing-value rule (absent
/// keys included). Non-removal strategies replace only the missing cells
/// of the target column; every other cell passes through unchanged.
pub fn fill_missing(rows: &[Row], config: &FillMissingConfig) -> FillOutcome {
    let column = config.column.as_str();

    match config.strategy {
        FillStrategy::Constant => match &config.constant {
            Some(value) => FillOutcome::filled(fill_with(rows, column, value)),
            None => FillOutcome::unchanged(
                rows,
                format!("constant fill for '{column}' is missing its constant value"),
            ),
        },

        FillStrategy::Mean => {
            let values = numeric_column_values(rows, column);
            if values.is_empty() {
                return FillOutcome::unchanged(
                    rows,
                    format!("no numeric values in '{column}' to compute a mean from"),
                );
            }
            FillOutcome::filled(fill_with(rows, column, &Value::Number(stats::mean(&values))))
        }

        FillStrategy::Median => {
            let sorted = stats::sorted(&numeric_column_values(rows, column));
            match stats::median_of_sorted(&sorted) {
                Some(median) => {
                    FillOutcome::filled(fill_with(rows, column, &Value::Number(median)))
                }
                None => FillOutcome::unchanged(
                    rows,
                    format!("no numeric values in '{column}' to compute a median from"),
                ),
            }
        }

        FillStrategy::Mode => match mode_value(rows, column) {
            Some(mode) => FillOutcome::filled(fill_with(rows, column, &mode)),
            None => FillOutcome::unchanged(
                rows,
                format!("no non-missing values in '{column}' to compute a mode from"),
            ),
        },

        FillStrategy::ForwardFill => FillOutcome::filled(forward_fill(rows, column)),

        FillStrategy::RemoveRows => FillOutcome::filled(
            rows.iter()
                .filter(|row| !row.get(column).is_none_or(Value::is_missing))
                .cloned()
                .collect(),
        ),
    }
}

/// Replace every missing cell of the column with the given value.
fn fill_with(rows: &[Row], column: &str, value: &Value) -> Vec<Row> {
    rows.iter()
        .map(|row| {
            let mut row = row.clone();
            if row.get(column).is_none_or(Value::is_missing) {
                row.insert(column.to_string(), value.clone());
            }
            row
        })
        .collect()
}

/// Most frequent non-missing value; ties go to the value seen first.
fn mode_value(rows: &[Row], column: &str) -> Option<Value> {
    let mut counts: IndexMap<String, (Value, usize)> = IndexMap::new();
    for row in rows {
        let Some(value) = row.get(column) else {
            continue;
        };
        if value.is_missing() {
            continue;
        }
        let key = serde_json::to_string(value).unwrap_or_default();
        counts
            .entry(key)
            .or_insert_with(|| (value.clone(), 0))
            .1 += 1;
    }

    let mut best: Option<(&Value, usize)> = None;
    for (value, count) in counts.values() {
        if best.is_none_or(|(_, best_count)| *count > best_count) {
            best = Some((value, *count));
        }
    }
    best.map(|(value, _)| value.clone())
}

/// Carry the nearest preceding non-missing value into missing cells.
/// A leading run of missing cells has nothing to carry and normalizes to
/// the missing sentinel.
fn forward_fill(rows: &[Row], column: &str) -> Vec<Row> {
    let mut last_valid: Option<Value> = None;
    rows.iter()
        .map(|row| {
            let mut row = row.clone();
            match row.get(column) {
                Some(value) if !value.is_missing() => {
                    last_valid = Some(value.clone());
                }
                _ => {
                    row.insert(
                        column.to_string(),
                        last_valid.clone().unwrap_or(Value::Missing),
                    );
                }
            }
            row
        })
        .collect()
}
