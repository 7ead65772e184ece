//! Error types for blobtrace-region

use thiserror::Error;

/// Errors that can occur during contour, label and track operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (image format, pixel bounds, configuration)
    #[error("core error: {0}")]
    Core(#[from] blobtrace_core::Error),

    /// Label grid access outside the backing grid
    #[error("label cell ({row}, {col}) outside {rows}x{cols} grid")]
    LabelOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
