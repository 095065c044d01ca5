//! Application layer for user-query
//!
//! This crate contains the query specifications, the retry loop that runs
//! them, and the port through which they reach the user.
//! It depends only on the domain layer.

pub mod ports;
pub mod queries;
pub mod use_cases;

// Re-export commonly used types
pub use ports::response_source::{ResponseSource, ResponseSourceError, ScriptedResponseSource};
pub use queries::{
    FloatQuery, IntegerQuery, MenuQuery, Number, NumberQuery, OpenPathQuery, QueryContext,
    QuerySpec, SavePathQuery, TextQuery,
};
pub use use_cases::execute_query::{QueryError, QueryExecutor};
