//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use user_query_domain::OutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults() {
        let config = FileOutputConfig::default();
        assert!(config.format.is_none());
        assert!(config.color);
    }

    #[test]
    fn test_output_deserialize() {
        let config: FileOutputConfig = toml::from_str("format = \"json\"\ncolor = false").unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert!(!config.color);
    }
}
