//! Error types for the scour library.

use thiserror::Error;

/// Main error type for scour operations.
///
/// The analysis and cleaning core degrades gracefully (empty datasets,
/// empty numeric subsets, and zero-variance columns are normal returns),
/// so errors only arise at the JSON interop boundary.
#[derive(Debug, Error)]
pub enum ScourError {
    /// A JSON value handed to the interop layer was not a flat object row.
    #[error("Invalid row at index {index}: {message}")]
    InvalidRow { index: usize, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for scour operations.
pub type Result<T> = std::result::Result<T, ScourError>;
