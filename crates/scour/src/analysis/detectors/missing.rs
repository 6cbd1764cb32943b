//! Missing-value detection for a single column.

use crate::analysis::report::{Issue, IssueType, Severity};
use crate::data::Row;

/// Scan one column for missing values.
///
/// A cell is missing when the key is absent from the row or
/// [`Value::is_missing`](crate::data::Value::is_missing) says so. Returns
/// `None` when the dataset is empty or no cell is missing.
pub fn detect_missing_values(rows: &[Row], column: &str) -> Option<Issue> {
    if rows.is_empty() {
        return None;
    }

    let missing_count = rows
        .iter()
        .filter(|row| row.get(column).is_none_or(|v| v.is_missing()))
        .count();

    if missing_count == 0 {
        return None;
    }

    let percentage = missing_count as f64 / rows.len() as f64 * 100.0;

    let severity = if percentage > 50.0 {
        Severity::Critical
    } else if percentage > 20.0 {
        Severity::High
    } else if percentage > 10.0 {
        Severity::Medium
    } else {
        Severity::Low
    };

    let suggestion = if percentage > 50.0 {
        "Consider removing this column or filling with domain-specific values"
    } else {
        "Fill missing values with median, mean, or mode depending on data type"
    };

    Some(Issue {
        issue_type: IssueType::MissingValues,
        column: column.to_string(),
        count: missing_count,
        percentage,
        severity,
        description: format!("{missing_count} missing values ({percentage:.1}%)"),
        suggestion: Some(suggestion.to_string()),
    })
}
