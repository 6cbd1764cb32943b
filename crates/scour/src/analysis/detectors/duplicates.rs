//! Exact duplicate row detection, dataset-wide.

use std::collections::HashSet;

use crate::analysis::report::{Issue, IssueType, Severity, ALL_COLUMNS};
use crate::data::{row_key, Row};

/// Scan the whole dataset for exact duplicate rows.
///
/// A row is a duplicate iff its full, order-sensitive serialization
/// matches an earlier row's. The reported percentage is pre-rounded to one
/// decimal. Returns `None` for an empty dataset or when every row is
/// distinct.
pub fn detect_duplicates(rows: &[Row]) -> Option<Issue> {
    if rows.is_empty() {
        return None;
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicate_count = 0usize;

    for row in rows {
        if !seen.insert(row_key(row)) {
            duplicate_count += 1;
        }
    }

    if duplicate_count == 0 {
        return None;
    }

    let percentage = (duplicate_count as f64 / rows.len() as f64 * 1000.0).round() / 10.0;

    let severity = if percentage > 10.0 {
        Severity::High
    } else if percentage > 5.0 {
        Severity::Medium
    } else {
        Severity::Low
    };

    Some(Issue {
        issue_type: IssueType::Duplicates,
        column: ALL_COLUMNS.to_string(),
        count: duplicate_count,
        percentage,
        severity,
        description: format!("{duplicate_count} exact duplicate rows found ({percentage:.1}%)"),
        suggestion: Some(
            "Remove duplicate rows unless they represent valid repeated records".to_string(),
        ),
    })
}
