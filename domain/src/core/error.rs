//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a programming-contract violation detected while
/// building a query's configuration. None of them are ever retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Menu must offer at least one option")]
    EmptyMenu,

    #[error("Menu key '{0}' appears more than once")]
    DuplicateMenuKey(String),

    #[error("Minimum {min} is greater than maximum {max}")]
    InvertedRange { min: String, max: String },

    #[error("Bound {0} cannot be ordered against other values")]
    UnorderedBound(String),
}
