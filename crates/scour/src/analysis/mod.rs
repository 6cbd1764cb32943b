//! Quality analysis: detectors, scoring, and the aggregate report.

pub mod detectors;

mod analyzer;
mod report;

pub use analyzer::QualityAnalyzer;
pub use report::{
    ColumnScore, Issue, IssueCounts, IssueType, QualityRating, QualityReport, QualitySummary,
    RatingCounts, Severity, ALL_COLUMNS,
};
