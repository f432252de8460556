//! Core traits and types for secret storage

use thiserror::Error;

/// Errors that can occur during secret store operations
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Store is read-only")]
    ReadOnly,

    #[error("Store not available: {0}")]
    NotAvailable(String),

    #[error("Invalid secret key: {0:?}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Other(String),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Capability for writing secrets into a vault
///
/// The seeder only ever calls `store_secret`. The remaining operations
/// exist so concrete stores can be inspected and cleaned up.
///
/// Implementations:
/// - In-memory (`MemorySecretStore`)
/// - Chained with a designated write target (`ChainSecretStore`)
/// - OS keychain (`KeychainSecretStore`)
///
/// # Example
///
/// ```
/// use vault_seed_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.store_secret("api-token", "abc123").unwrap();
/// assert_eq!(store.resolve_secret("api-token"), Some("abc123".to_string()));
/// ```
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Check if this store is available
    ///
    /// A keychain store is not available on a headless server, for example.
    fn is_available(&self) -> bool {
        true
    }

    /// Retrieve a secret by key
    fn resolve_secret(&self, key: &str) -> Option<String>;

    /// Store a secret, replacing any previous value under the same key
    fn store_secret(&self, key: &str, value: &str) -> SecretStoreResult<()>;

    /// Delete a secret. Deleting an absent key is not an error.
    fn delete_secret(&self, key: &str) -> SecretStoreResult<()>;

    /// Check if a secret exists
    fn has_secret(&self, key: &str) -> bool {
        self.resolve_secret(key).is_some()
    }
}
