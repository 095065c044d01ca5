//! Domain layer for user-query
//!
//! This crate contains the value objects that configure a question to the
//! user. It has no dependencies on how input is read or shown.
//!
//! # Core Concepts
//!
//! ## Query configuration
//!
//! - **Menu**: an ordered set of `(key, label)` options
//! - **Numeric range**: optional minimum and maximum, where an absent bound
//!   means unconstrained and zero is a real bound
//! - **Text limit**: optional maximum character count
//!
//! ## Check outcomes
//!
//! Answering a question happens in two steps, each with its own tagged
//! result: [`Conversion`] (raw text → typed value) and [`Validation`]
//! (typed value → accepted or not).

pub mod config;
pub mod core;
pub mod query;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use query::{
    menu::MenuOptions,
    outcome::{Conversion, Validation},
    path::{PathSyntaxError, parse_path},
    range::{NumericRange, RangeViolation},
    text::{DEFAULT_MAX_LENGTH, TextLimit, TextTooLong},
};
