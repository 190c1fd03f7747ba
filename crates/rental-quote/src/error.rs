//! Error types for rental-quote operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The range string did not split into exactly two `" - "`-separated tokens.
    #[error("Invalid range format: {0}")]
    Format(String),

    /// A token matched neither locale grammar, or a field in it was out of range.
    #[error("Invalid date-time token: {0}")]
    TokenParse(String),

    /// The range end does not fall strictly after its start.
    #[error("Invalid range order: {0}")]
    RangeOrder(String),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
