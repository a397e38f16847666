use std::sync::Mutex;

use async_trait::async_trait;
use tracing::warn;

use super::base::CredentialStore;
use crate::models::{Credentials, StoredCredentials, User};

/// An in-process credential store. This is the default backend (credentials
/// do not survive a reload) and the test double for the guard.
#[derive(Default)]
pub struct MemoryStore {
    // Token and raw user payload, kept unparsed so reads go through the
    // same parse path as the persistent backends.
    entry: Mutex<Option<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the raw entry directly, bypassing `write`. Lets tests plant a
    /// corrupt user payload the way a broken client write would.
    pub fn seed_raw(&self, token: impl Into<String>, user_payload: impl Into<String>) {
        *self.entry.lock().unwrap() = Some((token.into(), user_payload.into()));
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn read(&self) -> StoredCredentials {
        let mut entry = self.entry.lock().unwrap();
        let Some((token, payload)) = entry.clone() else {
            return StoredCredentials::Absent;
        };

        if token.is_empty() || payload.is_empty() {
            // Half an entry violates the pair invariant.
            warn!("Stored credentials were incomplete, clearing store.");
            *entry = None;
            return StoredCredentials::Absent;
        }

        match User::from_stored(&payload) {
            Ok(user) => StoredCredentials::Present(Credentials::new(token, user)),
            Err(e) => {
                warn!("Stored user record is corrupt, clearing store: {}", e);
                *entry = None;
                StoredCredentials::Corrupt
            }
        }
    }

    async fn write(&self, token: &str, user: &User) -> Result<(), String> {
        *self.entry.lock().unwrap() = Some((token.to_string(), user.to_stored()));
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        *self.entry.lock().unwrap() = None;
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A written pair reads back intact.
    #[tokio::test]
    async fn test_write_then_read() {
        let store = MemoryStore::new();
        let user = User::new(1, "A");
        store.write("abc", &user).await.unwrap();

        let snapshot = store.read().await;
        assert_eq!(
            snapshot,
            StoredCredentials::Present(Credentials::new("abc", user))
        );
    }

    /// A corrupt user payload reads as Corrupt once, then the store is empty.
    #[tokio::test]
    async fn test_corrupt_payload_self_heals() {
        let store = MemoryStore::new();
        store.seed_raw("abc", "{not json");

        assert_eq!(store.read().await, StoredCredentials::Corrupt);
        assert_eq!(store.read().await, StoredCredentials::Absent);
    }

    /// An empty token is half an entry and is treated as absent.
    #[tokio::test]
    async fn test_incomplete_pair_is_absent() {
        let store = MemoryStore::new();
        store.seed_raw("", r#"{"id":1,"name":"A"}"#);

        assert_eq!(store.read().await, StoredCredentials::Absent);
    }

    /// Clearing is idempotent.
    #[tokio::test]
    async fn test_clear() {
        let store = MemoryStore::new();
        store.write("abc", &User::new(1, "A")).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.read().await, StoredCredentials::Absent);
    }
}
