//! Exact duplicate row removal.

use std::collections::HashSet;

use crate::data::{row_key, Row};

/// Drop exact duplicate rows, keeping the first occurrence of each.
///
/// Uses the same order-sensitive row fingerprint as the duplicate
/// detector; relative order of the kept rows is preserved.
pub fn remove_duplicates(rows: &[Row]) -> Vec<Row> {
    let mut seen: HashSet<String> = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row_key(row)))
        .cloned()
        .collect()
}
