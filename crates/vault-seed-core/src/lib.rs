//! Vault Seed Core
//!
//! Seeds a pluggable secret store ("vault") from configuration at startup.
//! Each partition under `testing.edc.vaults` names one secret:
//!
//! ```text
//! testing.edc.vaults.secret1.key=api-token
//! testing.edc.vaults.secret1.value=abc123
//! ```
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vault_seed_core::config::FileConfigProvider;
//! use vault_seed_core::logging::ConsoleLogger;
//! use vault_seed_core::secrets::MemorySecretStore;
//!
//! let store = MemorySecretStore::new();
//! let provider = FileConfigProvider::from_env();
//!
//! vault_seed_core::initialize(&provider, &store, Arc::new(ConsoleLogger::new()))?;
//! # Ok::<(), vault_seed_core::InitError>(())
//! ```

pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod secrets;
pub mod seeder;

pub use bootstrap::{initialize, InitError, InitResult, VaultSeedExtension};

pub use seeder::{
    SecretEntry, SecretSeeder,
    VAULT_TESTING_KEY, VAULT_TESTING_PREFIX, VAULT_TESTING_VALUE,
};

pub use config::{
    Config, ConfigError, ConfigProvider, ConfigResult,
    EnvConfigProvider, FileConfigProvider, LayeredConfigProvider, MemoryConfigProvider,
};

pub use secrets::{
    SecretStore, SecretStoreError, SecretStoreResult,
    MemorySecretStore, ChainSecretStore, KeychainSecretStore,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};
