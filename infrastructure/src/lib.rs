//! Infrastructure layer for user-query
//!
//! This crate contains adapters to the outside world that the other layers
//! stay ignorant of. Today that is configuration file loading.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileQueryConfig,
    FileTextConfig,
};
