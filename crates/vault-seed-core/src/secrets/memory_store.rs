//! In-memory secret store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{SecretStore, SecretStoreResult};

/// In-memory secret store for tests and throwaway fixtures
///
/// Fully read-write with last-write-wins semantics. Secrets are lost when
/// the store is dropped. Any key is accepted, including the empty string.
///
/// # Example
///
/// ```
/// use vault_seed_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.store_secret("db-password", "s3cr3t").unwrap();
/// assert_eq!(store.resolve_secret("db-password"), Some("s3cr3t".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with initial values
    pub fn with_secrets(initial: HashMap<String, String>) -> Self {
        Self {
            secrets: RwLock::new(initial),
        }
    }

    pub fn clear(&self) {
        self.secrets.write().clear();
    }

    pub fn len(&self) -> usize {
        self.secrets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every stored secret
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.secrets.read().clone()
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn resolve_secret(&self, key: &str) -> Option<String> {
        self.secrets.read().get(key).cloned()
    }

    fn store_secret(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        self.secrets.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_secret(&self, key: &str) -> SecretStoreResult<()> {
        self.secrets.write().remove(key);
        Ok(())
    }
}

impl Clone for MemorySecretStore {
    fn clone(&self) -> Self {
        Self::with_secrets(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_name() {
        assert_eq!(MemorySecretStore::new().name(), "memory");
    }

    #[test]
    fn test_memory_store_crud() {
        let store = MemorySecretStore::new();
        assert!(store.is_empty());
        assert_eq!(store.resolve_secret("api-token"), None);

        store.store_secret("api-token", "abc123").unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.has_secret("api-token"));

        // Last write wins
        store.store_secret("api-token", "xyz789").unwrap();
        assert_eq!(store.resolve_secret("api-token"), Some("xyz789".to_string()));
        assert_eq!(store.len(), 1);

        store.delete_secret("api-token").unwrap();
        assert!(!store.has_secret("api-token"));
        assert!(store.is_empty());

        // Deleting again is fine
        store.delete_secret("api-token").unwrap();
    }

    #[test]
    fn test_memory_store_accepts_empty_key_and_value() {
        let store = MemorySecretStore::new();
        store.store_secret("", "").unwrap();
        assert_eq!(store.resolve_secret(""), Some(String::new()));
    }

    #[test]
    fn test_memory_store_with_initial_and_clear() {
        let mut initial = HashMap::new();
        initial.insert("k1".to_string(), "v1".to_string());
        initial.insert("k2".to_string(), "v2".to_string());

        let store = MemorySecretStore::with_secrets(initial);
        assert_eq!(store.len(), 2);
        assert_eq!(store.resolve_secret("k2"), Some("v2".to_string()));

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clone_is_independent() {
        let store = MemorySecretStore::new();
        store.store_secret("key", "value").unwrap();

        let cloned = store.clone();
        cloned.store_secret("key", "modified").unwrap();

        assert_eq!(store.resolve_secret("key"), Some("value".to_string()));
        assert_eq!(cloned.resolve_secret("key"), Some("modified".to_string()));
    }
}
