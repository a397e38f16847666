use serde::{Deserialize, Serialize};

/// The `User` struct is the record the sign-in flow stores alongside the
/// bearer token. It is kept in the same shape the client persists, so a
/// reload can rebuild the in-memory session without a network round trip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
        }
    }

    /// Parse a stored user payload. Any failure means the stored record is
    /// corrupt and the whole store entry must be treated as absent.
    pub fn from_stored(payload: &str) -> Result<Self, String> {
        serde_json::from_str(payload).map_err(|e| format!("Invalid stored user record: {}", e))
    }

    /// Serialize the record the way it is written to the store.
    pub fn to_stored(&self) -> String {
        serde_json::to_string(self).expect("Failed to serialize user record")
    }
}
