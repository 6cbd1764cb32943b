//! Quality report vocabulary: issues, scores, ratings, and the summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel column name for whole-row issues (exact duplicate rows).
pub const ALL_COLUMNS: &str = "all_columns";

/// Class of data quality defect.
///
/// The current detector suite produces the first three; the remaining
/// classes are part of the report vocabulary so their counts report
/// explicitly as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Null, absent, or NA-like cell values.
    MissingValues,
    /// Exact duplicate rows.
    Duplicates,
    /// Numeric values outside the IQR acceptance bounds.
    Outliers,
    /// Mixed value types within a column.
    TypeInconsistency,
    /// Malformed values (dates, identifiers, ...).
    FormatIssues,
    /// Values outside their domain.
    InvalidValues,
}

impl IssueType {
    /// Get a human-readable label for the issue type.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::MissingValues => "Missing Values",
            IssueType::Duplicates => "Duplicates",
            IssueType::Outliers => "Outliers",
            IssueType::TypeInconsistency => "Type Inconsistency",
            IssueType::FormatIssues => "Format Issues",
            IssueType::InvalidValues => "Invalid Values",
        }
    }
}

/// Severity of a detected issue, derived from type-specific thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// Quality rating band for a column score or the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityRating {
    /// 90-100: ready to use as-is.
    Excellent,
    /// 75-89: minor cleanup recommended.
    Good,
    /// 60-74: cleanup needed before use.
    Fair,
    /// 40-59: substantial cleanup needed.
    Poor,
    /// Below 40: unreliable without remediation.
    Critical,
}

impl QualityRating {
    /// Map a 0-100 score onto its rating band. The same bands apply to
    /// column scores and the overall score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => QualityRating::Excellent,
            s if s >= 75.0 => QualityRating::Good,
            s if s >= 60.0 => QualityRating::Fair,
            s if s >= 40.0 => QualityRating::Poor,
            _ => QualityRating::Critical,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            QualityRating::Excellent => "Excellent",
            QualityRating::Good => "Good",
            QualityRating::Fair => "Fair",
            QualityRating::Poor => "Poor",
            QualityRating::Critical => "Critical",
        }
    }
}

/// One detected data quality defect occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Class of defect.
    #[serde(rename = "type")]
    pub issue_type: IssueType,

    /// Affected column, or [`ALL_COLUMNS`] for whole-row issues.
    pub column: String,

    /// Number of affected items (cells or rows).
    pub count: usize,

    /// Affected share of the relevant population, 0-100.
    pub percentage: f64,

    /// Severity derived from type-specific thresholds.
    pub severity: Severity,

    /// Human-readable description.
    pub description: String,

    /// Remediation hint, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Quality measure for a single column.
///
/// `duplicate_percent`, `format_issue_percent`, and `type_inconsistencies`
/// are reserved components of the scoring model and stay zero under the
/// current detector suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnScore {
    /// Column name.
    pub column: String,
    /// Score, 0-100.
    pub score: f64,
    /// Rating band for the score.
    pub rating: QualityRating,
    /// Share of missing cells, 0-100.
    pub missing_percent: f64,
    /// Share of outliers among the column's numeric values, 0-100.
    pub outlier_percent: f64,
    /// Reserved, always 0.
    pub duplicate_percent: f64,
    /// Reserved, always 0.
    pub format_issue_percent: f64,
    /// Reserved, always 0.
    pub type_inconsistencies: usize,
    /// Issues that contributed to this column's score.
    pub issues: Vec<Issue>,
}

/// Issue counts by type, zero-initialized so absent defect classes report
/// explicitly as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub missing_values: usize,
    pub duplicates: usize,
    pub outliers: usize,
    pub type_inconsistency: usize,
    pub format_issues: usize,
    pub invalid_values: usize,
}

impl IssueCounts {
    /// Record one issue of the given type.
    pub fn record(&mut self, issue_type: IssueType) {
        match issue_type {
            IssueType::MissingValues => self.missing_values += 1,
            IssueType::Duplicates => self.duplicates += 1,
            IssueType::Outliers => self.outliers += 1,
            IssueType::TypeInconsistency => self.type_inconsistency += 1,
            IssueType::FormatIssues => self.format_issues += 1,
            IssueType::InvalidValues => self.invalid_values += 1,
        }
    }

    /// Total across all types.
    pub fn total(&self) -> usize {
        self.missing_values
            + self.duplicates
            + self.outliers
            + self.type_inconsistency
            + self.format_issues
            + self.invalid_values
    }
}

/// How many columns fall into each rating band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCounts {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
    pub critical: usize,
}

impl RatingCounts {
    /// Record one column with the given rating.
    pub fn record(&mut self, rating: QualityRating) {
        match rating {
            QualityRating::Excellent => self.excellent += 1,
            QualityRating::Good => self.good += 1,
            QualityRating::Fair => self.fair += 1,
            QualityRating::Poor => self.poor += 1,
            QualityRating::Critical => self.critical += 1,
        }
    }
}

/// Dataset-wide rollup of an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySummary {
    /// Total row count.
    pub total_rows: usize,
    /// Total column count.
    pub total_columns: usize,
    /// Total issue count across columns and dataset-wide checks.
    pub total_issues: usize,
    /// Issues bucketed by type.
    pub issues_by_type: IssueCounts,
    /// Histogram of column rating bands.
    pub quality_distribution: RatingCounts,
}

/// Top-level analysis result. Immutable once produced; re-running the
/// analyzer on transformed data yields a new, independent report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Overall score, 0-100: the unweighted mean of the column scores,
    /// rounded to the nearest integer.
    pub overall_score: f64,
    /// Rating band for the overall score.
    pub rating: QualityRating,
    /// One score per column, in schema order.
    pub column_scores: Vec<ColumnScore>,
    /// All issues: per-column issues plus dataset-wide ones.
    pub issues: Vec<Issue>,
    /// Dataset-wide rollup.
    pub summary: QualitySummary,
    /// When the analysis ran.
    pub generated_at: DateTime<Utc>,
}

impl QualityReport {
    /// Check if any issues were found.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Get all issues of a given type, in report order.
    pub fn issues_of_type(&self, issue_type: IssueType) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.issue_type == issue_type)
            .collect()
    }

    /// Get the score entry for a column.
    pub fn column_score(&self, column: &str) -> Option<&ColumnScore> {
        self.column_scores.iter().find(|c| c.column == column)
    }
}
