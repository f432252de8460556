//! Layered configuration provider

use std::sync::Arc;

use super::traits::{ConfigProvider, ConfigResult};
use super::tree::Config;

/// Several providers merged in order; later layers override earlier ones
///
/// A key first declared in an earlier layer keeps that layer's position
/// even when a later layer overrides its value, so partition order follows
/// the first layer that mentions each partition.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vault_seed_core::config::{ConfigProvider, LayeredConfigProvider, MemoryConfigProvider};
///
/// let file = Arc::new(MemoryConfigProvider::with_entries([("a", "from-file")]));
/// let overrides = Arc::new(MemoryConfigProvider::with_entries([("a", "override")]));
///
/// let layered = LayeredConfigProvider::new(vec![file, overrides]);
/// assert_eq!(layered.load().unwrap().get_string("a"), "override");
/// ```
pub struct LayeredConfigProvider {
    layers: Vec<Arc<dyn ConfigProvider>>,
}

impl LayeredConfigProvider {
    pub fn new(layers: Vec<Arc<dyn ConfigProvider>>) -> Self {
        Self { layers }
    }

    /// Append a layer that overrides every existing one
    pub fn with_layer(mut self, layer: Arc<dyn ConfigProvider>) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn layers(&self) -> &[Arc<dyn ConfigProvider>] {
        &self.layers
    }
}

impl ConfigProvider for LayeredConfigProvider {
    fn name(&self) -> &str {
        "layered"
    }

    fn load(&self) -> ConfigResult<Config> {
        let mut merged = Config::new();
        for layer in &self.layers {
            merged.merge(&layer.load()?);
        }
        Ok(merged)
    }
}

impl std::fmt::Debug for LayeredConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.layers.iter().map(|l| l.name()).collect();
        f.debug_struct("LayeredConfigProvider")
            .field("layers", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MemoryConfigProvider};

    struct BrokenProvider;

    impl ConfigProvider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        fn load(&self) -> ConfigResult<Config> {
            Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }
    }

    #[test]
    fn test_layers_override_in_order() {
        let base = Arc::new(MemoryConfigProvider::with_entries([
            ("p.one.key", "k1"),
            ("p.two.key", "k2"),
        ]));
        let overrides = Arc::new(MemoryConfigProvider::with_entries([
            ("p.three.key", "k3"),
            ("p.one.key", "k1-override"),
        ]));

        let config = LayeredConfigProvider::new(vec![base])
            .with_layer(overrides)
            .load()
            .unwrap();

        let partitions = config.get_config("p").partition();
        let names: Vec<_> = partitions.iter().map(|p| p.partition_name()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
        assert_eq!(partitions[0].get_string("key"), "k1-override");
    }

    #[test]
    fn test_no_layers_is_empty() {
        assert!(LayeredConfigProvider::new(vec![]).load().unwrap().is_empty());
    }

    #[test]
    fn test_layer_error_propagates() {
        let layered = LayeredConfigProvider::new(vec![
            Arc::new(MemoryConfigProvider::new()),
            Arc::new(BrokenProvider),
        ]);
        assert!(matches!(layered.load(), Err(ConfigError::Io(_))));
    }
}
