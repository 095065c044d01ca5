//! Terminal adapters
//!
//! - [`ConsoleResponseSource`] reads answers from stdin and writes prompts
//!   and error messages to stdout

mod response_source;

pub use response_source::ConsoleResponseSource;
