//! Chained secret store with a designated write target

use std::sync::Arc;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// A secret store that chains multiple stores together
///
/// Reads try each available store in order and return the first match.
/// Writes go to the designated write store (default: the first one), so
/// seeding through a chain lands every secret in exactly one backend.
///
/// # Example
///
/// ```
/// use vault_seed_core::secrets::{SecretStore, ChainSecretStore, MemorySecretStore};
/// use std::sync::Arc;
///
/// let fixtures = Arc::new(MemorySecretStore::new());
/// let fallback = Arc::new(MemorySecretStore::new());
///
/// let chain = ChainSecretStore::new(vec![fixtures.clone(), fallback]).unwrap();
/// chain.store_secret("api-token", "abc123").unwrap();
/// assert!(fixtures.has_secret("api-token"));
/// ```
pub struct ChainSecretStore {
    stores: Vec<Arc<dyn SecretStore>>,
    write_store_index: usize,
}

impl ChainSecretStore {
    /// Create a new chain store writing to the first store
    pub fn new(stores: Vec<Arc<dyn SecretStore>>) -> SecretStoreResult<Self> {
        Self::with_write_store(stores, 0)
    }

    /// Create a chain store with a specific write store
    pub fn with_write_store(
        stores: Vec<Arc<dyn SecretStore>>,
        write_store_index: usize,
    ) -> SecretStoreResult<Self> {
        if stores.is_empty() {
            return Err(SecretStoreError::Other(
                "ChainSecretStore requires at least one store".to_string(),
            ));
        }
        if write_store_index >= stores.len() {
            return Err(SecretStoreError::Other(format!(
                "write store index {} out of bounds for {} stores",
                write_store_index,
                stores.len()
            )));
        }
        Ok(Self {
            stores,
            write_store_index,
        })
    }

    pub fn stores(&self) -> &[Arc<dyn SecretStore>] {
        &self.stores
    }

    pub fn write_store(&self) -> &Arc<dyn SecretStore> {
        &self.stores[self.write_store_index]
    }

    /// Find the first available store holding a key
    pub fn find_store(&self, key: &str) -> Option<&Arc<dyn SecretStore>> {
        self.stores
            .iter()
            .find(|store| store.is_available() && store.has_secret(key))
    }
}

impl SecretStore for ChainSecretStore {
    fn name(&self) -> &str {
        "chain"
    }

    fn is_available(&self) -> bool {
        self.write_store().is_available()
    }

    fn resolve_secret(&self, key: &str) -> Option<String> {
        self.stores
            .iter()
            .filter(|store| store.is_available())
            .find_map(|store| store.resolve_secret(key))
    }

    fn store_secret(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        let target = self.write_store();
        if !target.is_available() {
            return Err(SecretStoreError::NotAvailable(target.name().to_string()));
        }
        target.store_secret(key, value)
    }

    fn delete_secret(&self, key: &str) -> SecretStoreResult<()> {
        for store in &self.stores {
            if !store.has_secret(key) {
                continue;
            }
            match store.delete_secret(key) {
                Ok(()) | Err(SecretStoreError::ReadOnly) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

// Arc<dyn SecretStore> doesn't implement Debug
impl std::fmt::Debug for ChainSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stores.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainSecretStore")
            .field("stores", &names)
            .field("write_store_index", &self.write_store_index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::MemorySecretStore;

    struct OfflineStore;

    impl SecretStore for OfflineStore {
        fn name(&self) -> &str {
            "offline"
        }
        fn is_available(&self) -> bool {
            false
        }
        fn resolve_secret(&self, _key: &str) -> Option<String> {
            Some("stale".to_string())
        }
        fn store_secret(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
            Ok(())
        }
        fn delete_secret(&self, _key: &str) -> SecretStoreResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_chain_store_fallback_and_priority() {
        let first = Arc::new(MemorySecretStore::new());
        let second = Arc::new(MemorySecretStore::new());
        second.store_secret("only-second", "2").unwrap();
        first.store_secret("both", "1").unwrap();
        second.store_secret("both", "2").unwrap();

        let chain = ChainSecretStore::new(vec![first, second]).unwrap();
        assert_eq!(chain.name(), "chain");
        assert_eq!(chain.resolve_secret("only-second"), Some("2".to_string()));
        assert_eq!(chain.resolve_secret("both"), Some("1".to_string()));
        assert_eq!(chain.find_store("only-second").map(|s| s.name()), Some("memory"));
    }

    #[test]
    fn test_chain_store_skips_unavailable_reads() {
        let memory = Arc::new(MemorySecretStore::new());
        let chain = ChainSecretStore::with_write_store(
            vec![Arc::new(OfflineStore), memory.clone()],
            1,
        )
        .unwrap();
        assert_eq!(chain.resolve_secret("anything"), None);
    }

    #[test]
    fn test_chain_store_writes_to_designated_store() {
        let first = Arc::new(MemorySecretStore::new());
        let second = Arc::new(MemorySecretStore::new());

        let chain =
            ChainSecretStore::with_write_store(vec![first.clone(), second.clone()], 1).unwrap();
        chain.store_secret("key", "value").unwrap();

        assert_eq!(first.resolve_secret("key"), None);
        assert_eq!(second.resolve_secret("key"), Some("value".to_string()));
    }

    #[test]
    fn test_chain_store_write_to_unavailable_store_fails() {
        let chain = ChainSecretStore::new(vec![Arc::new(OfflineStore)]).unwrap();
        assert!(!chain.is_available());
        assert!(matches!(
            chain.store_secret("key", "value"),
            Err(SecretStoreError::NotAvailable(name)) if name == "offline"
        ));
    }

    #[test]
    fn test_chain_store_delete_from_all() {
        let first = Arc::new(MemorySecretStore::new());
        let second = Arc::new(MemorySecretStore::new());
        first.store_secret("key", "1").unwrap();
        second.store_secret("key", "2").unwrap();

        let chain = ChainSecretStore::new(vec![first.clone(), second.clone()]).unwrap();
        chain.delete_secret("key").unwrap();

        assert!(!first.has_secret("key"));
        assert!(!second.has_secret("key"));
    }

    #[test]
    fn test_chain_store_construction_errors() {
        assert!(ChainSecretStore::new(vec![]).is_err());

        let err = ChainSecretStore::with_write_store(vec![Arc::new(MemorySecretStore::new())], 5)
            .unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }
}
