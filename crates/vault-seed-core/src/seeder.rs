//! Configuration-driven secret seeding
//!
//! Every partition under `testing.edc.vaults` declares one secret:
//!
//! ```text
//! testing.edc.vaults.secret1.key=api-token
//! testing.edc.vaults.secret1.value=abc123
//! ```
//!
//! The seeder turns each partition into a `SecretEntry` and writes it to
//! the injected `SecretStore`, in declaration order.

use crate::config::Config;
use crate::logging::{NoOpLogger, SharedLogger};
use crate::secrets::{SecretStore, SecretStoreResult};
use crate::{log_debug, log_error, log_info, log_warn};

/// Configuration prefix holding the secret partitions
pub const VAULT_TESTING_PREFIX: &str = "testing.edc.vaults";

/// Partition field holding the secret key
pub const VAULT_TESTING_KEY: &str = "key";

/// Partition field holding the secret value
pub const VAULT_TESTING_VALUE: &str = "value";

/// One secret read from a configuration partition
#[derive(Clone, PartialEq, Eq)]
pub struct SecretEntry {
    pub key: String,
    pub value: String,
}

impl SecretEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// Keep secret values out of debug output
impl std::fmt::Debug for SecretEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretEntry")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Writes configured secrets into a vault
///
/// # Example
///
/// ```
/// use vault_seed_core::config::Config;
/// use vault_seed_core::secrets::{MemorySecretStore, SecretStore};
/// use vault_seed_core::SecretSeeder;
///
/// let config = Config::from_entries([
///     ("testing.edc.vaults.a.key", "k1"),
///     ("testing.edc.vaults.a.value", "v1"),
/// ]);
/// let store = MemorySecretStore::new();
///
/// SecretSeeder::new().seed(&config, &store).unwrap();
/// assert_eq!(store.resolve_secret("k1"), Some("v1".to_string()));
/// ```
#[derive(Clone)]
pub struct SecretSeeder {
    prefix: String,
    logger: SharedLogger,
}

impl Default for SecretSeeder {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretSeeder {
    /// Seeder reading `testing.edc.vaults` with logging disabled
    pub fn new() -> Self {
        Self {
            prefix: VAULT_TESTING_PREFIX.to_string(),
            logger: NoOpLogger::shared(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Read every partition under the prefix into an ordered list of entries
    ///
    /// A partition missing `key` or `value` contributes an empty string for
    /// that field; nothing here fails.
    pub fn entries(&self, config: &Config) -> Vec<SecretEntry> {
        config
            .get_config(&self.prefix)
            .partition()
            .iter()
            .map(|partition| self.entry(partition))
            .collect()
    }

    fn entry(&self, partition: &Config) -> SecretEntry {
        for field in [VAULT_TESTING_KEY, VAULT_TESTING_VALUE] {
            if !partition.has_key(field) {
                log_warn!(
                    self.logger,
                    "partition '{}' has no '{}' field, using an empty string",
                    partition.root_path(),
                    field
                );
            }
        }
        SecretEntry::new(
            partition.get_string(VAULT_TESTING_KEY),
            partition.get_string(VAULT_TESTING_VALUE),
        )
    }

    /// Store every configured secret, stopping at the first store failure
    ///
    /// All entries are read before the first write. On failure the error is
    /// returned as the store produced it; entries after the failing one are
    /// never submitted and earlier writes are left in place.
    pub fn seed(&self, config: &Config, store: &dyn SecretStore) -> SecretStoreResult<()> {
        let entries = self.entries(config);
        log_info!(
            self.logger,
            "seeding {} secret(s) from '{}' into {} store",
            entries.len(),
            self.prefix,
            store.name()
        );

        for (index, entry) in entries.iter().enumerate() {
            log_debug!(self.logger, "storing secret '{}'", entry.key);
            if let Err(e) = store.store_secret(&entry.key, &entry.value) {
                log_error!(
                    self.logger,
                    "failed to store secret '{}' ({} of {}): {}",
                    entry.key,
                    index + 1,
                    entries.len(),
                    e
                );
                return Err(e);
            }
        }

        log_info!(self.logger, "seeded {} secret(s)", entries.len());
        Ok(())
    }
}

impl std::fmt::Debug for SecretSeeder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSeeder")
            .field("prefix", &self.prefix)
            .finish()
    }
}
