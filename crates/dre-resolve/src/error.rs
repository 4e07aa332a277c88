//! Error types for row classification.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The configured category column is absent from the input. The
    /// available headers are echoed back so a typo is obvious.
    #[error(
        "category column '{column}' not found in input (available columns: {})",
        available.join(", ")
    )]
    CategoryColumnNotFound {
        column: String,
        available: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
