//! Errors raised while turning a puzzle payload into a [`Puzzle`](crate::Puzzle).
//!
//! The interaction engine itself never fails; everything fallible happens
//! before `load_puzzle` is called.

/// Error produced while decoding or validating a puzzle payload
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle grid is empty")]
    EmptyGrid,

    #[error("row {row} has {found} squares, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("square ({x}, {y}) is invalid: {reason}")]
    InvalidSquare { x: usize, y: usize, reason: String },

    #[error("response is missing {field}")]
    MissingField { field: &'static str },

    #[error("generation theme must not be empty")]
    EmptyTheme,

    #[error("invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PuzzleError {
    /// Whether the payload parsed but had the wrong shape
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            PuzzleError::EmptyGrid | PuzzleError::NotSquare { .. } | PuzzleError::InvalidSquare { .. }
        )
    }
}
