//! Text query configuration from TOML (`[text]` section)
//!
//! ```toml
//! [text]
//! max_length = 40     # 0 only accepts empty text
//! unlimited = false   # true ignores max_length
//! ```

use serde::{Deserialize, Serialize};
use user_query_domain::DEFAULT_MAX_LENGTH;

/// Raw text query configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTextConfig {
    /// Maximum number of characters accepted
    pub max_length: usize,
    /// Accept text of any length
    pub unlimited: bool,
}

impl Default for FileTextConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            unlimited: false,
        }
    }
}

impl FileTextConfig {
    /// The configured limit, `None` when unlimited
    pub fn limit(&self) -> Option<usize> {
        if self.unlimited {
            None
        } else {
            Some(self.max_length)
        }
    }
}
