//! Error types for color construction.

use thiserror::Error;

/// Why a color specification was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The specification was empty.
    #[error("color specification is empty")]
    Empty,

    /// A `#`-prefixed value that is not `#RGB` or `#RRGGBB`.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Neither a known color name nor a code in 0-255.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// Result type alias for color construction.
pub type ColorResult<T> = Result<T, ColorError>;
