//! Use cases (application services)
//!
//! Each use case drives one interaction between the user and the domain.

pub mod execute_query;
