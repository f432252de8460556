//! Configuration provider trait

use std::path::PathBuf;

use super::tree::Config;

/// A source of configuration entries
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory, for tests and programmatic setup
/// - `FileConfigProvider`: Properties, YAML or JSON file
/// - `EnvConfigProvider`: Process environment variables
/// - `LayeredConfigProvider`: Several providers merged in order
pub trait ConfigProvider: Send + Sync {
    /// Human-readable name of this source, used in log lines
    fn name(&self) -> &str;

    /// Load every entry this source currently holds as a top-level `Config`
    fn load(&self) -> ConfigResult<Config>;
}

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },

    #[error("Properties error: {0}")]
    Properties(#[from] java_properties::PropertiesError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
