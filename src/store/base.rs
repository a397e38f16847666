use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::file_store::FileStore;
use super::memory_store::MemoryStore;
use crate::config::{StoreBackend, StoreConfig};
use crate::models::{StoredCredentials, User};

/// The CredentialStore trait abstracts the persisted token + user pair
/// (read, write, clear). The pair invariant lives behind this boundary:
/// a read never observes half of an entry.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the stored pair. Implementations self-heal: a corrupt or
    /// half-present entry is cleared before the snapshot is returned.
    async fn read(&self) -> StoredCredentials;

    /// Write the pair in one step.
    async fn write(&self, token: &str, user: &User) -> Result<(), String>;

    /// Remove both entries. Clearing an empty store is fine.
    async fn clear(&self) -> Result<(), String>;

    fn is_persistent(&self) -> bool {
        // Default implementation should return always True for real stores
        // The memory store returns false so we can write better debug messages
        true
    }
}

/// Creates a concrete store implementation based on the StoreConfig.
/// If `store.enabled = false`, credentials live in memory only.
pub fn create_store(config: &StoreConfig) -> Arc<dyn CredentialStore> {
    if !config.enabled {
        info!("Credential persistence is disabled. Using MemoryStore.");
        return Arc::new(MemoryStore::new());
    }

    match &config.backend {
        Some(StoreBackend::File(file_config)) => {
            info!("Using file credential store at {:?}.", file_config.path);
            Arc::new(FileStore::new(file_config))
        }
        None => {
            error!("Store is enabled, but no backend config is provided!");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A disabled store config yields the in-memory backend.
    #[tokio::test]
    async fn test_create_store_disabled() {
        let store = create_store(&StoreConfig::default());
        assert!(!store.is_persistent());
        assert_eq!(store.read().await, StoredCredentials::Absent);
    }

    /// A file-backed config yields a persistent store.
    #[test]
    fn test_create_store_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StoreConfig {
            enabled: true,
            backend: Some(StoreBackend::File(
                crate::store::file_store::FileStoreConfig {
                    path: dir.path().join("credentials.json"),
                },
            )),
        };
        let store = create_store(&config);
        assert!(store.is_persistent());
    }
}
