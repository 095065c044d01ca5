//! Tagged results for the two checking steps of a query.
//!
//! Converting raw text and validating the converted value are kept apart
//! so that a message can tell "not the right shape" from "right shape but
//! not allowed".

/// Result of turning raw text into a typed value
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion<T> {
    /// The text has the right shape
    Converted(T),
    /// The text cannot be read as the target type
    Rejected(String),
}

impl<T> Conversion<T> {
    pub fn rejected(message: impl Into<String>) -> Self {
        Conversion::Rejected(message.into())
    }
}

/// Result of checking a converted value against the query's policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    pub fn invalid(message: impl Into<String>) -> Self {
        Validation::Invalid(message.into())
    }
}
