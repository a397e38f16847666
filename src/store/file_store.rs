use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::base::CredentialStore;
use crate::models::{Credentials, StoredCredentials, User};

#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct FileStoreConfig {
    pub path: PathBuf,
}

/// The on-disk envelope: the two string-keyed entries the client keeps in
/// local storage, plus a write stamp. The user record stays JSON-serialized
/// inside the envelope, matching the client's storage layout.
#[derive(Deserialize, Serialize)]
struct Envelope {
    bearer_token: String,
    user: String,
    written_at: DateTime<Utc>,
}

/// A credential store persisted to a single JSON file, so the pair
/// survives application reloads.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(config: &FileStoreConfig) -> Self {
        FileStore {
            path: config.path.clone(),
        }
    }

    async fn remove(&self) -> Result<(), String> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("Failed to clear credential file: {}", e)),
        }
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn read(&self) -> StoredCredentials {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return StoredCredentials::Absent,
            Err(e) => {
                warn!("Could not read credential file: {}", e);
                return StoredCredentials::Absent;
            }
        };

        let envelope: Envelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Credential file did not parse, clearing it: {}", e);
                if let Err(e) = self.remove().await {
                    warn!("{}", e);
                }
                return StoredCredentials::Corrupt;
            }
        };

        if envelope.bearer_token.is_empty() || envelope.user.is_empty() {
            // Half an entry violates the pair invariant.
            warn!("Stored credentials were incomplete, clearing store.");
            if let Err(e) = self.remove().await {
                warn!("{}", e);
            }
            return StoredCredentials::Absent;
        }

        match User::from_stored(&envelope.user) {
            Ok(user) => {
                debug!("Read stored credentials written at {}", envelope.written_at);
                StoredCredentials::Present(Credentials::new(envelope.bearer_token, user))
            }
            Err(e) => {
                warn!("Stored user record is corrupt, clearing store: {}", e);
                if let Err(e) = self.remove().await {
                    warn!("{}", e);
                }
                StoredCredentials::Corrupt
            }
        }
    }

    async fn write(&self, token: &str, user: &User) -> Result<(), String> {
        let envelope = Envelope {
            bearer_token: token.to_string(),
            user: user.to_stored(),
            written_at: Utc::now(),
        };
        let raw = serde_json::to_string_pretty(&envelope)
            .map_err(|e| format!("Failed to serialize credential envelope: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| format!("Failed to create credential directory: {}", e))?;
            }
        }

        // Write-then-rename so the pair never appears half written.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| format!("Failed to write credential file: {}", e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| format!("Failed to commit credential file: {}", e))
    }

    async fn clear(&self) -> Result<(), String> {
        self.remove().await
    }
}
