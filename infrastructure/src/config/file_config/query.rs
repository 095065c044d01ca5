//! Query configuration from TOML (`[query]` section)

use serde::{Deserialize, Serialize};

/// Raw query execution configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    /// Give up after this many answers to one question (unbounded if unset)
    pub max_attempts: Option<usize>,
}
