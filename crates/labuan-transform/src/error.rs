//! Error types for form transformation.

use thiserror::Error;

/// Fatal transformation errors. Per-field extraction misses are not errors;
/// they leave a null in the derived column.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A source column required by the layout is absent.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// A monetary value is not a number.
    #[error("column '{column}' row {row}: expected a number, found '{value}'")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// The assessment year on row 0 has fewer than four characters.
    #[error("assessment year '{value}' must have at least four digits")]
    InvalidAssessmentYear { value: String },

    /// The table has no rows to read the assessment year from.
    #[error("table has no rows")]
    EmptyTable,

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
