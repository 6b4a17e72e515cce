//! Error types for the flipbook core.

use thiserror::Error;

/// Result type alias using [`BookError`].
pub type Result<T> = std::result::Result<T, BookError>;

/// Configuration errors detected while building a book.
///
/// Interaction never produces an error; bad input is reported through
/// [`crate::Outcome::Ignored`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookError {
    #[error("page count must be an even number of at least 2, got {0}")]
    InvalidPageCount(u32),

    #[error("invalid flip tuning: {0}")]
    InvalidTuning(&'static str),
}
