//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — construction-time contract violations

pub mod error;
