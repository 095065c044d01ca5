//! Configuration file loading for user-query
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `USER_QUERY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./user-query.toml` or `./.user-query.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/user-query/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileQueryConfig, FileTextConfig,
};
pub use loader::ConfigLoader;
