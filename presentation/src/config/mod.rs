//! Presentation-level configuration
//!
//! Configuration for how the console adapter talks to the terminal.

use serde::{Deserialize, Serialize};

/// Console configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable colored error messages
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
