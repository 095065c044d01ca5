//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod query;
mod text;

pub use output::FileOutputConfig;
pub use query::FileQueryConfig;
pub use text::FileTextConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("max_attempts cannot be 0")]
    InvalidMaxAttempts,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Query execution settings
    pub query: FileQueryConfig,
    /// Text query settings
    pub text: FileTextConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // A question that may never be asked is a mistake, not a limit
        if let Some(0) = self.query.max_attempts {
            return Err(ConfigValidationError::InvalidMaxAttempts);
        }

        Ok(())
    }
}
