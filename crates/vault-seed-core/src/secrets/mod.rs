//! Secret storage abstractions and implementations
//!
//! This module provides the pluggable vault the seeder writes into:
//! - `SecretStore` trait, the capability the seeder consumes
//! - Built-in implementations: `MemorySecretStore`, `ChainSecretStore`, `KeychainSecretStore`

mod traits;
mod memory_store;
mod chain_store;
mod keychain_store;

pub use traits::{SecretStore, SecretStoreError, SecretStoreResult};
pub use memory_store::MemorySecretStore;
pub use chain_store::ChainSecretStore;
pub use keychain_store::{KeychainSecretStore, DEFAULT_SERVICE};
