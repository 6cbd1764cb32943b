//! Quality analyzer: runs the detector suite and scores the dataset.

use chrono::Utc;

use crate::data::{column_names, Row};

use super::detectors::{detect_duplicates, detect_missing_values, detect_outliers};
use super::report::{
    ColumnScore, Issue, IssueCounts, QualityRating, QualityReport, QualitySummary, RatingCounts,
};

/// Weight of the missing-value percentage in the column score.
const MISSING_WEIGHT: f64 = 2.0;
/// Weight of the outlier percentage in the column score.
const OUTLIER_WEIGHT: f64 = 1.0;

/// Analyzes a dataset and produces a [`QualityReport`].
///
/// Scores are recomputed from scratch on every call; nothing is cached or
/// incrementally updated.
pub struct QualityAnalyzer;

impl QualityAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze a dataset.
    ///
    /// Runs the missing-value and outlier detectors per column and the
    /// duplicate detector once dataset-wide. The duplicate issue joins the
    /// flat issue list and the type tally but never feeds a column score.
    /// An empty dataset yields a zeroed report rated critical.
    pub fn analyze(&self, rows: &[Row]) -> QualityReport {
        if rows.is_empty() {
            return Self::empty_report();
        }

        let columns = column_names(rows);
        let mut issues: Vec<Issue> = Vec::new();
        let mut column_scores: Vec<ColumnScore> = Vec::with_capacity(columns.len());

        for column in &columns {
            let missing_issue = detect_missing_values(rows, column);
            let outlier_issue = detect_outliers(rows, column);

            let missing_percent = missing_issue.as_ref().map_or(0.0, |i| i.percentage);
            let outlier_percent = outlier_issue.as_ref().map_or(0.0, |i| i.percentage);

            let column_issues: Vec<Issue> =
                [missing_issue, outlier_issue].into_iter().flatten().collect();
            issues.extend(column_issues.iter().cloned());

            let score = (100.0
                - missing_percent * MISSING_WEIGHT
                - outlier_percent * OUTLIER_WEIGHT)
                .max(0.0);

            column_scores.push(ColumnScore {
                column: column.clone(),
                score,
                rating: QualityRating::from_score(score),
                missing_percent,
                outlier_percent,
                duplicate_percent: 0.0,
                format_issue_percent: 0.0,
                type_inconsistencies: 0,
                issues: column_issues,
            });
        }

        if let Some(duplicate_issue) = detect_duplicates(rows) {
            issues.push(duplicate_issue);
        }

        let overall_score = if column_scores.is_empty() {
            0.0
        } else {
            (column_scores.iter().map(|c| c.score).sum::<f64>() / column_scores.len() as f64)
                .round()
        };

        let mut issues_by_type = IssueCounts::default();
        for issue in &issues {
            issues_by_type.record(issue.issue_type);
        }

        let mut quality_distribution = RatingCounts::default();
        for column in &column_scores {
            quality_distribution.record(column.rating);
        }

        let summary = QualitySummary {
            total_rows: rows.len(),
            total_columns: columns.len(),
            total_issues: issues.len(),
            issues_by_type,
            quality_distribution,
        };

        QualityReport {
            overall_score,
            rating: QualityRating::from_score(overall_score),
            column_scores,
            issues,
            summary,
            generated_at: Utc::now(),
        }
    }

    fn empty_report() -> QualityReport {
        QualityReport {
            overall_score: 0.0,
            rating: QualityRating::Critical,
            column_scores: Vec::new(),
            issues: Vec::new(),
            summary: QualitySummary {
                total_rows: 0,
                total_columns: 0,
                total_issues: 0,
                issues_by_type: IssueCounts::default(),
                quality_distribution: RatingCounts::default(),
            },
            generated_at: Utc::now(),
        }
    }
}

impl Default for QualityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
