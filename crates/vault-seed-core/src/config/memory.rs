//! In-memory configuration provider

use parking_lot::RwLock;

use super::traits::{ConfigProvider, ConfigResult};
use super::tree::Config;

/// In-memory configuration provider for tests and programmatic setup
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    config: RwLock<Config>,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider holding the given `(key, value)` pairs
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            config: RwLock::new(Config::from_entries(entries)),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.config.write().set(key, value);
    }

    pub fn clear(&self) {
        *self.config.write() = Config::new();
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> ConfigResult<Config> {
        Ok(self.config.read().clone())
    }
}
