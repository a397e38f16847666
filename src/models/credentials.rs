use serde::{Deserialize, Serialize};

use super::user::User;

/// A bearer token and the user record it was issued for. The two are
/// written and cleared together; no API exposes one without the other.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

impl Credentials {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Credentials {
            token: token.into(),
            user,
        }
    }
}

/// Snapshot of a credential store read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredCredentials {
    /// Nothing stored: the anonymous state.
    Absent,
    /// An entry was present but the user payload did not parse. The store
    /// clears itself before returning this.
    Corrupt,
    /// A complete token + user pair.
    Present(Credentials),
}

impl StoredCredentials {
    pub fn is_present(&self) -> bool {
        matches!(self, StoredCredentials::Present(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            StoredCredentials::Present(credentials) => Some(&credentials.user),
            _ => None,
        }
    }
}
