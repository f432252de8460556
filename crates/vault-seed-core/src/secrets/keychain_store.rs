//! System keychain secret store
//!
//! Uses the OS keychain as the vault backend:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::{log_debug, log_error, log_warn};

/// Default keychain service name
pub const DEFAULT_SERVICE: &str = "edc-vault-seed";

const AVAILABILITY_PROBE: &str = "__vault_seed_availability_check__";

/// Secret store backed by the system keychain
///
/// Every secret is an entry `(service, key)`; the service name namespaces
/// seeded fixtures away from the user's own credentials.
///
/// # Example
///
/// ```no_run
/// use vault_seed_core::secrets::{KeychainSecretStore, SecretStore};
///
/// let store = KeychainSecretStore::with_service("connector-tests");
/// store.store_secret("api-token", "abc123").unwrap();
/// assert!(store.has_secret("api-token"));
/// ```
pub struct KeychainSecretStore {
    service_name: String,
    logger: SharedLogger,
}

impl KeychainSecretStore {
    pub fn new() -> Self {
        Self::with_service(DEFAULT_SERVICE)
    }

    /// Create a keychain store with a custom service name
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service_name: service.into(),
            logger: NoOpLogger::shared(),
        }
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn entry(&self, key: &str) -> SecretStoreResult<Entry> {
        if key.is_empty() {
            // Backends reject an empty account name with an opaque error
            return Err(SecretStoreError::InvalidKey(key.to_string()));
        }
        Entry::new(&self.service_name, key)
            .map_err(|e| SecretStoreError::Backend(format!("failed to create keychain entry: {}", e)))
    }
}

impl Default for KeychainSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for KeychainSecretStore {
    fn name(&self) -> &str {
        "keychain"
    }

    fn is_available(&self) -> bool {
        // Fails on headless machines without a keychain daemon
        match Entry::new(&self.service_name, AVAILABILITY_PROBE) {
            Ok(_) => true,
            Err(e) => {
                log_warn!(self.logger, "keychain unavailable for service '{}': {}", self.service_name, e);
                false
            }
        }
    }

    fn resolve_secret(&self, key: &str) -> Option<String> {
        let entry = self.entry(key).ok()?;
        match entry.get_password() {
            Ok(password) => Some(password),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                log_warn!(self.logger, "keychain read of '{}' failed: {}", key, e);
                None
            }
        }
    }

    fn store_secret(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        log_debug!(self.logger, "keychain store '{}' in service '{}'", key, self.service_name);

        self.entry(key)?.set_password(value).map_err(|e| {
            log_error!(self.logger, "keychain write of '{}' failed: {}", key, e);
            SecretStoreError::Backend(format!("failed to store in keychain: {}", e))
        })?;

        // Read back through a fresh entry so a cached handle can't hide a failed write
        match self.entry(key)?.get_password() {
            Ok(stored) if stored == value => Ok(()),
            Ok(_) => Err(SecretStoreError::Backend(format!(
                "keychain verification failed for '{}': value mismatch",
                key
            ))),
            Err(e) => Err(SecretStoreError::Backend(format!(
                "keychain verification failed for '{}': {}",
                key, e
            ))),
        }
    }

    fn delete_secret(&self, key: &str) -> SecretStoreResult<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(SecretStoreError::Backend(format!(
                "failed to delete from keychain: {}",
                e
            ))),
        }
    }
}

impl std::fmt::Debug for KeychainSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeychainSecretStore")
            .field("service_name", &self.service_name)
            .finish()
    }
}
