//! Error types for canvas rendering and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for renderer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while creating, drawing, or saving a canvas.
///
/// Font resolution failures are not errors: they fall back to the builtin
/// glyph source.
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas dimensions must both be non-zero.
    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed.
    #[error("Failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    /// PNG decoding failed.
    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// A serialized artifact script could not be read.
    #[error("Invalid artifact script: {0}")]
    Script(String),
}
