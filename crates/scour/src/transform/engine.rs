//! Transformation engine: suggests cleaning steps from a quality report
//! and executes a caller-selected batch against a dataset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{IssueType, QualityReport};
use crate::data::{column_values, Row, Value};

use super::cleaners::{fill_missing, remove_duplicates, remove_outliers};
use super::suggestion::{
    FillMissingConfig, FillStrategy, FlagConfig, OutlierMethod, RemoveOutliersConfig,
    TransformKind, Transformation,
};

/// Missing percentage above which a numeric column is better truncated
/// than imputed.
const REMOVE_ROWS_CUTOFF: f64 = 80.0;

/// How many rows the before/after audit samples capture.
const SAMPLE_ROWS: usize = 3;

/// Audit record for one executed step. The full sequence is the
/// authoritative record of what happened to the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationAudit {
    /// 1-based step index.
    pub step: usize,

    /// Kind label of the step (`remove-duplicates`, `fill-missing`, ...).
    #[serde(rename = "type")]
    pub step_type: String,

    /// Description of the step as presented to the user.
    pub description: String,

    /// Row count entering the step.
    pub rows_before: usize,

    /// Row count leaving the step.
    pub rows_after: usize,

    /// `rows_before - rows_after`: positive when rows were removed,
    /// negative when rows were added, zero for in-place fills and flags.
    pub rows_affected: i64,

    /// First rows of the dataset entering the step.
    pub before_sample: Vec<Row>,

    /// First rows of the dataset leaving the step.
    pub after_sample: Vec<Row>,

    /// When the step ran.
    pub timestamp: DateTime<Utc>,

    /// Set when the step degraded to a no-op because its configuration
    /// could not be applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Final output of executing a transformation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationResult {
    /// The fully transformed dataset.
    pub cleaned_data: Vec<Row>,

    /// Descriptions of the steps that ran, in execution order.
    pub applied: Vec<String>,

    /// Reserved; always 0. Re-run the analyzer on the input and output
    /// datasets to measure the actual improvement.
    pub quality_improvement: f64,

    /// One audit record per executed step.
    pub audit_log: Vec<TransformationAudit>,

    /// Warnings raised by degraded steps, in execution order.
    pub warnings: Vec<String>,
}

/// Generates suggested cleaning steps and executes selected ones.
pub struct TransformEngine;

impl TransformEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Generate suggested transformations for a quality report.
    ///
    /// Order is fixed: the duplicate fix first (when duplicates exist),
    /// then one entry per missing-values issue in report order, then one
    /// entry per outliers issue. Everything starts `applied = false`;
    /// selection belongs to the caller.
    pub fn suggest(&self, report: &QualityReport, rows: &[Row]) -> Vec<Transformation> {
        let mut suggestions = Vec::new();

        if let Some(issue) = report.issues_of_type(IssueType::Duplicates).first() {
            suggestions.push(Transformation::new(
                "remove-duplicates",
                format!("Remove {} duplicate rows", issue.count),
                TransformKind::RemoveDuplicates,
            ));
        }

        for issue in report.issues_of_type(IssueType::MissingValues) {
            if is_numeric_eligible(rows, &issue.column) {
                let (strategy, label) = if issue.percentage > REMOVE_ROWS_CUTOFF {
                    (FillStrategy::RemoveRows, "remove rows (>80% missing)")
                } else {
                    (FillStrategy::Median, "median")
                };

                suggestions.push(Transformation::new(
                    format!("fill-missing-{}", issue.column),
                    format!(
                        "Fill missing values in '{}' ({:.1}% missing) with {label}",
                        issue.column, issue.percentage
                    ),
                    TransformKind::FillMissing(FillMissingConfig {
                        column: issue.column.clone(),
                        strategy,
                        constant: None,
                    }),
                ));
            } else {
                // Free-text and identifier columns cannot be imputed
                // safely; surface the issue without proposing a mutation.
                suggestions.push(Transformation::new(
                    format!("flag-missing-{}", issue.column),
                    format!(
                        "{:.1}% missing values in '{}' - Manual review recommended \
                         (identifiers cannot be auto-filled)",
                        issue.percentage, issue.column
                    ),
                    TransformKind::FlagOnly(FlagConfig {
                        column: issue.column.clone(),
                        issue_type: IssueType::MissingValues,
                        count: issue.count,
                    }),
                ));
            }
        }

        for issue in report.issues_of_type(IssueType::Outliers) {
            suggestions.push(Transformation::new(
                format!("remove-outliers-{}", issue.column),
                format!(
                    "Remove {} outliers in '{}' ({:.1}% of values)",
                    issue.count, issue.column, issue.percentage
                ),
                TransformKind::RemoveOutliers(RemoveOutliersConfig {
                    column: issue.column.clone(),
                    method: OutlierMethod::Iqr,
                    threshold: Some(1.5),
                }),
            ));
        }

        suggestions
    }

    /// Execute the selected transformations in order.
    ///
    /// Only entries with `applied = true` run, in the order given; each
    /// step's output feeds the next step. Flag-only entries pass the data
    /// through unchanged but still produce an audit record, preserving the
    /// trace that the issue was acknowledged.
    pub fn execute(
        &self,
        rows: &[Row],
        transformations: &[Transformation],
    ) -> TransformationResult {
        let mut cleaned: Vec<Row> = rows.to_vec();
        let mut applied = Vec::new();
        let mut audit_log = Vec::new();
        let mut warnings = Vec::new();

        for (index, transformation) in
            transformations.iter().filter(|t| t.applied).enumerate()
        {
            let rows_before = cleaned.len();
            let before_sample: Vec<Row> =
                cleaned.iter().take(SAMPLE_ROWS).cloned().collect();

            let (next, warning) = Self::apply(&cleaned, &transformation.kind);
            cleaned = next;

            let rows_after = cleaned.len();
            if let Some(ref warning) = warning {
                warnings.push(warning.clone());
            }

            applied.push(transformation.description.clone());
            audit_log.push(TransformationAudit {
                step: index + 1,
                step_type: transformation.kind.label().to_string(),
                description: transformation.description.clone(),
                rows_before,
                rows_after,
                rows_affected: rows_before as i64 - rows_after as i64,
                before_sample,
                after_sample: cleaned.iter().take(SAMPLE_ROWS).cloned().collect(),
                timestamp: Utc::now(),
                warning,
            });
        }

        TransformationResult {
            cleaned_data: cleaned,
            applied,
            quality_improvement: 0.0,
            audit_log,
            warnings,
        }
    }

    /// Run one step through its cleaner.
    fn apply(rows: &[Row], kind: &TransformKind) -> (Vec<Row>, Option<String>) {
        match kind {
            TransformKind::RemoveDuplicates => (remove_duplicates(rows), None),
            TransformKind::FillMissing(config) => {
                let outcome = fill_missing(rows, config);
                (outcome.rows, outcome.warning)
            }
            TransformKind::RemoveOutliers(config) => (remove_outliers(rows, config), None),
            TransformKind::FlagOnly(_) => (rows.to_vec(), None),
        }
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A column qualifies for numeric imputation when all of its non-missing
/// values are numbers, or when it holds at least one number and every text
/// value is merely an NA-like marker. A "mostly numbers with stray N/A
/// text" column therefore still qualifies.
fn is_numeric_eligible(rows: &[Row], column: &str) -> bool {
    let mut saw_non_missing = false;
    let mut all_numeric = true;
    for value in column_values(rows, column).filter(|v| !v.is_missing()) {
        saw_non_missing = true;
        if !value.is_numeric() {
            all_numeric = false;
        }
    }
    if saw_non_missing && all_numeric {
        return true;
    }

    let has_numeric = column_values(rows, column).any(|v| v.is_numeric());
    let text_is_only_na = column_values(rows, column)
        .filter(|v| matches!(v, Value::Text(_)))
        .all(|v| v.is_missing());

    has_numeric && text_is_only_na
}

#[cfg(test)]
mod tests {
    use crate::analysis::QualityAnalyzer;
    use crate::data::Value;

    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn dirty_rows() -> Vec<Row> {
        vec![
            row(&[("id", Value::from("a")), ("age", Value::from(25i64))]),
            row(&[("id", Value::from("a")), ("age", Value::from(25i64))]),
            row(&[("id", Value::from("b")), ("age", Value::Missing)]),
            row(&[("id", Value::from("c")), ("age", Value::from(30i64))]),
            row(&[("id", Value::from("d")), ("age", Value::from(1000i64))]),
            row(&[("id", Value::Missing), ("age", Value::from(28i64))]),
        ]
    }

    #[test]
    fn test_suggest_order_and_kinds() {
        let rows = dirty_rows();
        let report = QualityAnalyzer::new().analyze(&rows);
        let suggestions = TransformEngine::new().suggest(&report, &rows);

        // duplicates, then missing issues in report order (id is flag-only,
        // age is numeric), then outliers
        assert_eq!(suggestions[0].id, "remove-duplicates");
        assert!(matches!(
            &suggestions[0].kind,
            TransformKind::RemoveDuplicates
        ));

        let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "remove-duplicates",
                "flag-missing-id",
                "fill-missing-age",
                "remove-outliers-age",
            ]
        );
        assert!(suggestions.iter().all(|s| !s.applied));
    }

    #[test]
    fn test_suggest_median_for_numeric_column() {
        let rows = dirty_rows();
        let report = QualityAnalyzer::new().analyze(&rows);
        let suggestions = TransformEngine::new().suggest(&report, &rows);

        let fill = suggestions
            .iter()
            .find(|s| s.id == "fill-missing-age")
            .expect("fill suggestion");
        let TransformKind::FillMissing(ref config) = fill.kind else {
            panic!("expected fill-missing kind");
        };
        assert_eq!(config.strategy, FillStrategy::Median);
        assert!(fill.description.contains("median"));
    }

    #[test]
    fn test_suggest_remove_rows_above_cutoff() {
        // 5 of 6 age cells missing: 83.3% > 80%
        let rows = vec![
            row(&[("age", Value::from(30i64))]),
            row(&[("age", Value::Missing)]),
            row(&[("age", Value::Missing)]),
            row(&[("age", Value::from("N/A"))]),
            row(&[("age", Value::Missing)]),
            row(&[("age", Value::Missing)]),
        ];
        let report = QualityAnalyzer::new().analyze(&rows);
        let suggestions = TransformEngine::new().suggest(&report, &rows);

        let fill = suggestions
            .iter()
            .find(|s| s.id == "fill-missing-age")
            .expect("fill suggestion");
        let TransformKind::FillMissing(ref config) = fill.kind else {
            panic!("expected fill-missing kind");
        };
        assert_eq!(config.strategy, FillStrategy::RemoveRows);
        assert!(fill.description.contains("remove rows"));
    }

    #[test]
    fn test_suggest_flags_text_column() {
        let rows = vec![
            row(&[("name", Value::from("alice"))]),
            row(&[("name", Value::Missing)]),
        ];
        let report = QualityAnalyzer::new().analyze(&rows);
        let suggestions = TransformEngine::new().suggest(&report, &rows);

        assert_eq!(suggestions.len(), 1);
        let TransformKind::FlagOnly(ref config) = suggestions[0].kind else {
            panic!("expected flag-only kind");
        };
        assert_eq!(config.column, "name");
        assert_eq!(config.issue_type, IssueType::MissingValues);
        assert_eq!(config.count, 1);
    }

    #[test]
    fn test_execute_runs_only_applied_in_order() {
        let rows = dirty_rows();
        let report = QualityAnalyzer::new().analyze(&rows);
        let suggestions: Vec<Transformation> = TransformEngine::new()
            .suggest(&report, &rows)
            .into_iter()
            .map(|s| {
                let select = s.id == "remove-duplicates" || s.id == "remove-outliers-age";
                s.with_applied(select)
            })
            .collect();

        let result = TransformEngine::new().execute(&rows, &suggestions);

        // dedupe drops 1 row, outlier removal drops the 1000 row
        assert_eq!(result.cleaned_data.len(), 4);
        assert_eq!(result.applied.len(), 2);
        assert_eq!(result.audit_log.len(), 2);
        assert_eq!(result.audit_log[0].step, 1);
        assert_eq!(result.audit_log[0].step_type, "remove-duplicates");
        assert_eq!(result.audit_log[1].step, 2);
        assert_eq!(result.audit_log[1].step_type, "remove-outliers");
        assert_eq!(result.quality_improvement, 0.0);
    }

    #[test]
    fn test_execute_threads_steps() {
        let rows = dirty_rows();
        // Steps run sequentially: the second step sees the deduped data
        let transformations = vec![
            Transformation::new("remove-duplicates", "dedupe", TransformKind::RemoveDuplicates)
                .with_applied(true),
            Transformation::new(
                "fill-missing-age",
                "fill age",
                TransformKind::FillMissing(FillMissingConfig {
                    column: "age".to_string(),
                    strategy: FillStrategy::Median,
                    constant: None,
                }),
            )
            .with_applied(true),
        ];

        let result = TransformEngine::new().execute(&rows, &transformations);

        assert_eq!(result.audit_log[0].rows_before, 6);
        assert_eq!(result.audit_log[0].rows_after, 5);
        assert_eq!(result.audit_log[0].rows_affected, 1);
        assert_eq!(result.audit_log[1].rows_before, 5);
        assert_eq!(result.audit_log[1].rows_after, 5);
        assert_eq!(result.audit_log[1].rows_affected, 0);

        // Median of [25, 30, 1000, 28] after dedupe is 29
        let filled = &result.cleaned_data[1]["age"];
        assert_eq!(*filled, Value::Number(29.0));
    }

    #[test]
    fn test_flag_only_is_audited_noop() {
        let rows = dirty_rows();
        let transformations = vec![Transformation::new(
            "flag-missing-id",
            "review id",
            TransformKind::FlagOnly(FlagConfig {
                column: "id".to_string(),
                issue_type: IssueType::MissingValues,
                count: 1,
            }),
        )
        .with_applied(true)];

        let result = TransformEngine::new().execute(&rows, &transformations);

        assert_eq!(result.cleaned_data, rows);
        assert_eq!(result.applied, vec!["review id".to_string()]);
        assert_eq!(result.audit_log.len(), 1);
        assert_eq!(result.audit_log[0].rows_affected, 0);
        assert_eq!(result.audit_log[0].step_type, "flag-only");
    }

    #[test]
    fn test_execute_nothing_selected() {
        let rows = dirty_rows();
        let report = QualityAnalyzer::new().analyze(&rows);
        let suggestions = TransformEngine::new().suggest(&report, &rows);

        let result = TransformEngine::new().execute(&rows, &suggestions);

        assert_eq!(result.cleaned_data, rows);
        assert!(result.applied.is_empty());
        assert!(result.audit_log.is_empty());
    }

    #[test]
    fn test_degraded_step_surfaces_warning() {
        let rows = dirty_rows();
        let transformations = vec![Transformation::new(
            "fill-missing-id",
            "fill id with constant",
            TransformKind::FillMissing(FillMissingConfig {
                column: "id".to_string(),
                strategy: FillStrategy::Constant,
                constant: None,
            }),
        )
        .with_applied(true)];

        let result = TransformEngine::new().execute(&rows, &transformations);

        assert_eq!(result.cleaned_data, rows);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.audit_log[0].warning.is_some());
    }

    #[test]
    fn test_audit_samples_capped_at_three_rows() {
        let rows = dirty_rows();
        let transformations = vec![Transformation::new(
            "remove-duplicates",
            "dedupe",
            TransformKind::RemoveDuplicates,
        )
        .with_applied(true)];

        let result = TransformEngine::new().execute(&rows, &transformations);

        assert_eq!(result.audit_log[0].before_sample.len(), 3);
        assert_eq!(result.audit_log[0].after_sample.len(), 3);
    }
}
