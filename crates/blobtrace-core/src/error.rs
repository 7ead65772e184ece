//! Error types for blobtrace-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Invalid arguments, unsupported image formats and out-of-range access
//! are kept as distinct variants so callers can tell them apart.

use thiserror::Error;

/// blobtrace core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value or malformed configuration
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Image channel count or bit depth not supported by the operation
    #[error("unsupported format: {channels} channel(s) at {depth} bits per channel")]
    UnsupportedFormat { channels: u32, depth: u32 },

    /// Pixel coordinates outside the image
    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    PixelOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Backing buffer too small for the requested layout
    #[error("buffer size mismatch: need {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type alias for blobtrace core operations
pub type Result<T> = std::result::Result<T, Error>;
