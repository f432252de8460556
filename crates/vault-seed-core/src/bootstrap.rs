//! Startup entry point
//!
//! Call `initialize` once while composing the program, after the secret
//! store is ready and before the program reports itself as started.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConfigError, ConfigProvider};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::secrets::{SecretStore, SecretStoreError};
use crate::seeder::SecretSeeder;
use crate::log_debug;

/// Failure while seeding at startup
#[derive(Error, Debug)]
pub enum InitError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to seed vault: {0}")]
    Store(#[from] SecretStoreError),
}

pub type InitResult<T> = Result<T, InitError>;

/// Load configuration from `provider` and seed `store` from `testing.edc.vaults`
///
/// # Example
///
/// ```
/// use vault_seed_core::config::MemoryConfigProvider;
/// use vault_seed_core::logging::NoOpLogger;
/// use vault_seed_core::secrets::{MemorySecretStore, SecretStore};
///
/// let provider = MemoryConfigProvider::with_entries([
///     ("testing.edc.vaults.secret1.key", "api-token"),
///     ("testing.edc.vaults.secret1.value", "abc123"),
/// ]);
/// let store = MemorySecretStore::new();
///
/// vault_seed_core::initialize(&provider, &store, NoOpLogger::shared()).unwrap();
/// assert_eq!(store.resolve_secret("api-token"), Some("abc123".to_string()));
/// ```
pub fn initialize(
    provider: &dyn ConfigProvider,
    store: &dyn SecretStore,
    logger: SharedLogger,
) -> InitResult<()> {
    log_debug!(logger, "loading configuration from {} provider", provider.name());
    let config = provider.load()?;
    SecretSeeder::new().with_logger(logger).seed(&config, store)?;
    Ok(())
}

/// Seeding packaged as a component that owns its store handle
///
/// For programs that assemble their startup from a list of components
/// rather than calling `initialize` directly.
pub struct VaultSeedExtension {
    store: Arc<dyn SecretStore>,
    seeder: SecretSeeder,
    logger: SharedLogger,
}

impl VaultSeedExtension {
    pub const NAME: &'static str = "Vault Seed";

    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self {
            store,
            seeder: SecretSeeder::new(),
            logger: NoOpLogger::shared(),
        }
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.seeder = self.seeder.with_logger(logger.clone());
        self.logger = logger;
        self
    }

    /// Read secrets from a prefix other than `testing.edc.vaults`
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.seeder = self.seeder.with_prefix(prefix);
        self
    }

    pub fn name(&self) -> &str {
        Self::NAME
    }

    pub fn store(&self) -> &Arc<dyn SecretStore> {
        &self.store
    }

    pub fn initialize(&self, provider: &dyn ConfigProvider) -> InitResult<()> {
        log_debug!(self.logger, "loading configuration from {} provider", provider.name());
        let config = provider.load()?;
        self.seeder.seed(&config, self.store.as_ref())?;
        Ok(())
    }
}

impl std::fmt::Debug for VaultSeedExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSeedExtension")
            .field("store", &self.store.name())
            .field("prefix", &self.seeder.prefix())
            .finish()
    }
}
