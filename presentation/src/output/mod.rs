//! Output formatting for answered queries

pub mod answer;
pub mod console;

pub use answer::QueryAnswer;
pub use console::ConsoleFormatter;
