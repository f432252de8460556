//! Environment variable configuration provider

use std::env;

use super::traits::{ConfigProvider, ConfigResult};
use super::tree::Config;

/// Configuration read from process environment variables
///
/// Variable names map to keys by lowercasing and turning `_` into `.`:
/// `TESTING_EDC_VAULTS_SECRET1_KEY` becomes `testing.edc.vaults.secret1.key`.
/// Because of that mapping a partition name cannot itself contain `_`.
///
/// The environment has no declaration order, so variables are applied
/// sorted by name.
///
/// # Example
///
/// ```
/// use vault_seed_core::config::EnvConfigProvider;
///
/// let config = EnvConfigProvider::config_from_vars(
///     [("TESTING_EDC_VAULTS_S1_KEY", "api-token")],
///     None,
/// );
/// assert_eq!(config.get_string("testing.edc.vaults.s1.key"), "api-token");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider {
    prefix: Option<String>,
}

impl EnvConfigProvider {
    /// Provider over every environment variable
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider over variables whose name starts with `prefix`, e.g. `TESTING_EDC_`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Map an environment variable name to a dotted configuration key
    pub fn env_to_key(name: &str) -> String {
        name.to_lowercase().replace('_', ".")
    }

    /// Build a `Config` from arbitrary `(name, value)` pairs using the same
    /// mapping, filtering and ordering as `load`
    pub fn config_from_vars<I, K, V>(vars: I, prefix: Option<&str>) -> Config
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| prefix.map_or(true, |p| k.starts_with(p)))
            .collect();
        vars.sort_by(|a, b| a.0.cmp(&b.0));

        let mut config = Config::new();
        for (name, value) in vars {
            config.set(Self::env_to_key(&name), value);
        }
        config
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn load(&self) -> ConfigResult<Config> {
        // env::vars panics on non-UTF-8 entries; skip them instead
        let vars = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Ok(Self::config_from_vars(vars, self.prefix.as_deref()))
    }
}
