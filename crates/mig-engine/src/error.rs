//! Error types for engine configuration

use std::path::PathBuf;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config is not valid TOML for [`EngineConfig`](crate::EngineConfig)
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Log filter directive could not be parsed
    #[error("invalid log filter `{filter}`")]
    LogFilter {
        /// The rejected directive
        filter: String,
    },
}
