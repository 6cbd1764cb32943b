//! Transformation suggestions and their strongly typed configurations.

use serde::{Deserialize, Serialize};

use crate::analysis::IssueType;
use crate::data::Value;

/// Strategy for filling missing values in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillStrategy {
    /// Use a caller-supplied constant.
    Constant,
    /// Mean of the column's numeric values.
    Mean,
    /// Median of the column's numeric values.
    Median,
    /// Most frequent non-missing value of any type.
    Mode,
    /// Carry the nearest preceding non-missing value forward.
    ForwardFill,
    /// Drop rows where the column is missing.
    RemoveRows,
}

impl FillStrategy {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FillStrategy::Constant => "constant",
            FillStrategy::Mean => "mean",
            FillStrategy::Median => "median",
            FillStrategy::Mode => "mode",
            FillStrategy::ForwardFill => "forward-fill",
            FillStrategy::RemoveRows => "remove-rows",
        }
    }
}

/// Method for identifying outlier rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutlierMethod {
    /// Interquartile-range bounds; the threshold is the IQR multiplier.
    Iqr,
    /// Standard-deviation distance from the mean; the threshold is the
    /// maximum absolute z-score.
    ZScore,
}

impl OutlierMethod {
    /// Default threshold for the method: 1.5 IQRs or 3 standard deviations.
    pub fn default_threshold(&self) -> f64 {
        match self {
            OutlierMethod::Iqr => 1.5,
            OutlierMethod::ZScore => 3.0,
        }
    }
}

/// Configuration for the fill-missing cleaner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillMissingConfig {
    /// Target column.
    pub column: String,
    /// Fill strategy.
    pub strategy: FillStrategy,
    /// Value for the `constant` strategy.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub constant: Option<Value>,
}

/// Configuration for the remove-outliers cleaner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveOutliersConfig {
    /// Target column.
    pub column: String,
    /// Detection method.
    pub method: OutlierMethod,
    /// Threshold override; `None` uses the method default.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub threshold: Option<f64>,
}

impl RemoveOutliersConfig {
    /// The effective threshold for this configuration.
    pub fn threshold(&self) -> f64 {
        self.threshold
            .unwrap_or_else(|| self.method.default_threshold())
    }
}

/// Configuration for an informational flag-only entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagConfig {
    /// Flagged column.
    pub column: String,
    /// The issue class being surfaced.
    pub issue_type: IssueType,
    /// Affected item count.
    pub count: usize,
}

/// The remediation a transformation performs, one case per cleaner.
///
/// Execution dispatches on this with a single exhaustive match; there is
/// no stringly-typed fallthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TransformKind {
    /// Drop exact duplicate rows, keeping first occurrences.
    RemoveDuplicates,
    /// Fill (or drop) missing values in one column.
    FillMissing(FillMissingConfig),
    /// Drop outlier rows for one column.
    RemoveOutliers(RemoveOutliersConfig),
    /// Informational only; never mutates data.
    FlagOnly(FlagConfig),
}

impl TransformKind {
    /// Get the kebab-case label used in audit records.
    pub fn label(&self) -> &'static str {
        match self {
            TransformKind::RemoveDuplicates => "remove-duplicates",
            TransformKind::FillMissing(_) => "fill-missing",
            TransformKind::RemoveOutliers(_) => "remove-outliers",
            TransformKind::FlagOnly(_) => "flag-only",
        }
    }
}

/// A suggested (or caller-constructed) cleaning step.
///
/// `applied` is owned by the consumer: the engine generates suggestions
/// with `applied = false` and later executes exactly those the caller has
/// switched on, in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    /// Stable identifier, derived from the transformation and its column.
    pub id: String,

    /// Human-readable description of what the step will do.
    pub description: String,

    /// Whether the consumer selected this step for execution.
    pub applied: bool,

    /// The remediation to perform.
    #[serde(flatten)]
    pub kind: TransformKind,
}

impl Transformation {
    /// Create a suggestion. Suggestions always start unselected.
    pub fn new(id: impl Into<String>, description: impl Into<String>, kind: TransformKind) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            applied: false,
            kind,
        }
    }

    /// Set the applied flag.
    pub fn with_applied(mut self, applied: bool) -> Self {
        self.applied = applied;
        self
    }
}
