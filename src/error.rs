//! Error types for termform.

use thiserror::Error;

/// Result type alias for termform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in termform operations.
///
/// Layout and navigation themselves never fail: degenerate inputs produce
/// degenerate geometry and a navigation pass that finds no acceptor simply
/// leaves no element focused. The error channel exists for explicit index
/// operations and surface construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An element index was outside the valid range.
    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of addressable elements.
        len: usize,
    },

    /// A surface was requested with non-positive dimensions.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions {
        /// The requested width.
        width: i32,
        /// The requested height.
        height: i32,
    },
}
