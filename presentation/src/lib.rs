//! Presentation layer for user-query
//!
//! This crate contains the console response source, the one-call
//! `ask_for_*` entry points, CLI definitions, answer formatting and the
//! interactive workbench.

pub mod ask;
pub mod cli;
pub mod config;
pub mod console;
pub mod output;
pub mod workbench;

// Re-export commonly used types
pub use ask::{
    AskError, Asker, ask_for_float, ask_for_int, ask_for_menu_selection, ask_for_path_open,
    ask_for_path_save, ask_for_str,
};
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::ConsoleConfig;
pub use console::ConsoleResponseSource;
pub use output::{ConsoleFormatter, QueryAnswer};
pub use workbench::{Workbench, WorkbenchError};
