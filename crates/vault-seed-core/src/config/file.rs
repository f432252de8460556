//! File-based configuration provider
//!
//! Reads `.properties`, `.yaml`/`.yml` or `.json` files. Nested YAML and JSON
//! mappings are flattened to dotted keys so every format ends up as the same
//! `Config` tree:
//!
//! ```yaml
//! testing:
//!   edc:
//!     vaults:
//!       secret1:
//!         key: api-token
//!         value: abc123
//! ```
//!
//! is equivalent to `testing.edc.vaults.secret1.key=api-token` and
//! `testing.edc.vaults.secret1.value=abc123`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use java_properties::PropertiesIter;

use super::traits::{ConfigError, ConfigProvider, ConfigResult};
use super::tree::Config;

/// Environment variable naming the configuration file
pub const CONFIG_FILE_ENV_VAR: &str = "EDC_FS_CONFIG";

/// File used when `EDC_FS_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "dataspaceconnector-configuration.properties";

/// On-disk configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Properties,
    Yaml,
    Json,
}

impl FileFormat {
    /// Pick a format from the file extension; anything unknown is properties
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Properties,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Properties => "properties",
            FileFormat::Yaml => "yaml",
            FileFormat::Json => "json",
        }
    }
}

/// File-based configuration provider
///
/// A missing file loads as an empty configuration, so seeding with no
/// config file is a no-op rather than a startup failure.
///
/// # Example
///
/// ```no_run
/// use vault_seed_core::config::{ConfigProvider, FileConfigProvider};
///
/// let provider = FileConfigProvider::new("connector.properties");
/// let config = provider.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
    format: FileFormat,
}

impl FileConfigProvider {
    /// Create a provider for `path`, detecting the format from its extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        Self { path, format }
    }

    /// Create a provider with an explicit format
    pub fn with_format(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Provider for the file named by `EDC_FS_CONFIG`, or the default file
    /// in the working directory
    pub fn from_env() -> Self {
        Self::from_env_var(CONFIG_FILE_ENV_VAR)
    }

    /// Provider for the file named by `var`; unset or blank falls back to
    /// `DEFAULT_CONFIG_FILE`
    pub fn from_env_var(var: &str) -> Self {
        let path = env::var(var)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn parse(&self, content: &str) -> ConfigResult<Config> {
        match self.format {
            FileFormat::Properties => parse_properties(content),
            FileFormat::Yaml => {
                if content.trim().is_empty() {
                    return Ok(Config::new());
                }
                let value: serde_yaml::Value = serde_yaml::from_str(content)?;
                let mut config = Config::new();
                flatten_yaml(&self.path, "", &value, &mut config)?;
                Ok(config)
            }
            FileFormat::Json => {
                if content.trim().is_empty() {
                    return Ok(Config::new());
                }
                let value: serde_json::Value = serde_json::from_str(content)?;
                let mut config = Config::new();
                flatten_json(&self.path, "", &value, &mut config)?;
                Ok(config)
            }
        }
    }
}

impl ConfigProvider for FileConfigProvider {
    fn name(&self) -> &str {
        self.format.as_str()
    }

    fn load(&self) -> ConfigResult<Config> {
        if !self.exists() {
            return Ok(Config::new());
        }
        let content = fs::read_to_string(&self.path)?;
        self.parse(&content)
    }
}

/// Parse Java `.properties` content, keeping declaration order
///
/// Follows `java.util.Properties`: `=`, `:` or whitespace separate key and
/// value, a trailing `\` continues the logical line, `\uXXXX` and the usual
/// escapes are decoded, and trailing whitespace in values is kept. Content is
/// read as UTF-8.
pub fn parse_properties(content: &str) -> ConfigResult<Config> {
    let mut config = Config::new();
    PropertiesIter::new_with_encoding(content.as_bytes(), UTF_8)
        .read_into(|key, value| config.set(key, value))?;
    Ok(config)
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn parse_error(path: &Path, message: String) -> ConfigError {
    ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    }
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => yaml_scalar(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn flatten_yaml(
    path: &Path,
    prefix: &str,
    value: &serde_yaml::Value,
    config: &mut Config,
) -> ConfigResult<()> {
    use serde_yaml::Value;
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let segment = yaml_scalar(k).ok_or_else(|| {
                    parse_error(path, format!("unsupported mapping key under '{}'", prefix))
                })?;
                flatten_yaml(path, &join(prefix, &segment), v, config)?;
            }
        }
        Value::Sequence(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten_yaml(path, &join(prefix, &i.to_string()), v, config)?;
            }
        }
        Value::Tagged(tagged) => flatten_yaml(path, prefix, &tagged.value, config)?,
        Value::Null if prefix.is_empty() => {}
        scalar => {
            if prefix.is_empty() {
                return Err(parse_error(path, "top level must be a mapping".to_string()));
            }
            config.set(prefix, yaml_scalar(scalar).unwrap_or_default());
        }
    }
    Ok(())
}

fn flatten_json(
    path: &Path,
    prefix: &str,
    value: &serde_json::Value,
    config: &mut Config,
) -> ConfigResult<()> {
    use serde_json::Value;
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten_json(path, &join(prefix, k), v, config)?;
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten_json(path, &join(prefix, &i.to_string()), v, config)?;
            }
        }
        Value::Null if prefix.is_empty() => {}
        scalar => {
            if prefix.is_empty() {
                return Err(parse_error(path, "top level must be an object".to_string()));
            }
            let text = match scalar {
                Value::Null => String::new(),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            config.set(prefix, text);
        }
    }
    Ok(())
}
