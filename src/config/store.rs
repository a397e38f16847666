use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::store::file_store::FileStoreConfig;

/// A wrapper for the credential store configuration:
/// - enabled: if false, credentials are held in memory only and do not
///   survive a reload.
/// - backend: the persistent backend to use when enabled.
#[derive(Deserialize, Serialize, Debug, Default, JsonSchema)]
pub struct StoreConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub backend: Option<StoreBackend>,
}

/// The existing store backends. We differentiate them via a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
#[serde(tag = "type")]
pub enum StoreBackend {
    #[serde(rename = "file")]
    File(FileStoreConfig),
    // Add more variants here as needed.
}
