//! Statistical outlier detection for a single numeric column.

use crate::analysis::report::{Issue, IssueType, Severity};
use crate::data::{numeric_column_values, Row};
use crate::stats;

/// IQR multiplier used when scanning for outliers.
pub(crate) const IQR_MULTIPLIER: f64 = 1.5;

/// Scan one column for outliers using the IQR method.
///
/// Only numeric (non-NaN) values participate; a column with no numeric
/// values never produces an issue, so text columns short-circuit here.
/// The percentage is relative to the numeric value count, not the row
/// count. Returns `None` when no value falls outside the bounds.
pub fn detect_outliers(rows: &[Row], column: &str) -> Option<Issue> {
    let values = numeric_column_values(rows, column);
    let (lower, upper) = stats::iqr_bounds(&values, IQR_MULTIPLIER)?;

    let outlier_count = values.iter().filter(|&&v| v < lower || v > upper).count();
    if outlier_count == 0 {
        return None;
    }

    let percentage = outlier_count as f64 / values.len() as f64 * 100.0;

    let severity = if percentage > 10.0 {
        Severity::High
    } else if percentage > 5.0 {
        Severity::Medium
    } else {
        Severity::Low
    };

    Some(Issue {
        issue_type: IssueType::Outliers,
        column: column.to_string(),
        count: outlier_count,
        percentage,
        severity,
        description: format!(
            "{outlier_count} statistical outliers detected using IQR method \
             (values < {lower:.2} or > {upper:.2})"
        ),
        suggestion: Some(format!(
            "Review outliers: values < {lower:.2} or > {upper:.2}"
        )),
    })
}
