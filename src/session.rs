//! The in-memory representation of the current user. Derived state: it is
//! rebuilt from the credential store and never persisted itself.

use tracing::{debug, info};

use crate::models::{StoredCredentials, User};
use crate::store::CredentialStore;

/// The current identity, for the life of the application process. Two
/// reachable states: anonymous (`current_user` absent) and authenticated.
#[derive(Debug, Default)]
pub struct AuthSession {
    current_user: Option<User>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Set the in-memory identity. Idempotent for the same user.
    pub fn hydrate(&mut self, user: User) {
        if self.current_user.as_ref() != Some(&user) {
            debug!("Session hydrated for user '{}'", user.name);
        }
        self.current_user = Some(user);
    }

    /// Rebuild the session from the store, e.g. on cold start. Leaves the
    /// session untouched unless the store holds a valid pair.
    pub async fn hydrate_from_store(&mut self, store: &dyn CredentialStore) {
        if let StoredCredentials::Present(credentials) = store.read().await {
            self.hydrate(credentials.user);
        }
    }

    /// Entry point for the sign-in flow: one store write plus one hydrate,
    /// establishing the pair invariant before the next guarded navigation.
    pub async fn sign_in(
        &mut self,
        store: &dyn CredentialStore,
        token: &str,
        user: User,
    ) -> Result<(), String> {
        store.write(token, &user).await?;
        info!("User '{}' signed in", user.name);
        self.hydrate(user);
        Ok(())
    }

    /// Clear the session and the store together.
    pub async fn sign_out(&mut self, store: &dyn CredentialStore) -> Result<(), String> {
        if let Some(user) = self.current_user.take() {
            info!("User '{}' signed out", user.name);
        }
        store.clear().await
    }

    pub(crate) fn clear(&mut self) {
        self.current_user = None;
    }
}
