//! Outlier row removal for a single numeric column.

use crate::data::{numeric_column_values, Row, Value};
use crate::stats;
use crate::transform::{OutlierMethod, RemoveOutliersConfig};

/// Drop rows whose numeric value in the target column is an outlier.
///
/// Rows whose cell is non-numeric (text, boolean, missing, NaN) are always
/// kept; only genuine numeric values can be outliers. A column with no
/// numeric values, or zero variance under the z-score method, leaves the
/// dataset unchanged.
pub fn remove_outliers(rows: &[Row], config: &RemoveOutliersConfig) -> Vec<Row> {
    let values = numeric_column_values(rows, &config.column);
    if values.is_empty() {
        return rows.to_vec();
    }

    match config.method {
        OutlierMethod::Iqr => {
            // values is non-empty, so bounds always exist
            let Some((lower, upper)) = stats::iqr_bounds(&values, config.threshold()) else {
                return rows.to_vec();
            };
            retain_rows(rows, &config.column, |v| v >= lower && v <= upper)
        }

        OutlierMethod::ZScore => {
            let mean = stats::mean(&values);
            let std_dev = stats::population_std_dev(&values);
            if std_dev == 0.0 {
                return rows.to_vec();
            }

            let threshold = config.threshold();
            retain_rows(rows, &config.column, |v| {
                ((v - mean) / std_dev).abs() <= threshold
            })
        }
    }
}

fn retain_rows(rows: &[Row], column: &str, keep: impl Fn(f64) -> bool) -> Vec<Row> {
    rows.iter()
        .filter(|row| match row.get(column).and_then(Value::as_number) {
            Some(value) => keep(value),
            None => true,
        })
        .cloned()
        .collect()
}
