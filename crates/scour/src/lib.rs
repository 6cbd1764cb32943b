//! Scour: rule-based data quality analysis and cleaning for tabular datasets.
//!
//! Scour scores a dataset's quality per column and overall, detects
//! specific defect classes, and applies a reproducible, auditable sequence
//! of cleaning transformations.
//!
//! # Core Principles
//!
//! - **Deterministic**: every detector and cleaner is a pure rule; the same
//!   input always produces the same output
//! - **Non-destructive**: cleaners return new datasets, inputs are never
//!   mutated
//! - **Auditable**: every executed step is recorded with before/after
//!   metrics and samples
//!
//! # Example
//!
//! ```
//! use scour::{QualityAnalyzer, TransformEngine};
//!
//! let rows = scour::rows_from_json(serde_json::json!([
//!     {"name": "alice", "age": 34},
//!     {"name": "alice", "age": 34},
//!     {"name": "bob", "age": null},
//! ])).unwrap();
//!
//! let report = QualityAnalyzer::new().analyze(&rows);
//! println!("Score: {} ({:?})", report.overall_score, report.rating);
//!
//! let engine = TransformEngine::new();
//! let suggestions = engine.suggest(&report, &rows);
//! // ... the caller selects which suggestions to apply ...
//! let result = engine.execute(&rows, &suggestions);
//! println!("{} rows after cleaning", result.cleaned_data.len());
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod transform;

mod stats;

pub use analysis::{
    ColumnScore, Issue, IssueCounts, IssueType, QualityAnalyzer, QualityRating, QualityReport,
    QualitySummary, RatingCounts, Severity, ALL_COLUMNS,
};
pub use data::{rows_from_json, Row, Value};
pub use error::{Result, ScourError};
pub use transform::{
    FillMissingConfig, FillStrategy, FlagConfig, OutlierMethod, RemoveOutliersConfig,
    TransformEngine, TransformKind, Transformation, TransformationAudit, TransformationResult,
};
