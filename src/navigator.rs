//! The host navigation pipeline. It resolves the target, reads the store
//! for guarded routes, applies the side effects a decision implies, and
//! projects the page title once a navigation commits. Navigations are
//! serialized: the next one does not begin until the previous committed or
//! was redirected.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::NavigationConfig;
use crate::guard::{decide, Decision, RedirectReason};
use crate::models::{StoredCredentials, User};
use crate::routes::{RouteTable, ViewId};
use crate::session::AuthSession;
use crate::store::CredentialStore;
use crate::title::TitleProjector;

/// Redirect hops allowed within a single navigation before the route
/// table is considered misconfigured.
const MAX_REDIRECTS: usize = 8;

/// A committed navigation.
#[derive(Debug, Clone)]
pub struct Navigation {
    pub route_name: &'static str,
    pub view: Option<ViewId>,
    pub path: String,
    pub params: HashMap<String, String>,
    pub title: String,
    /// Why the originally requested destination was substituted, when it
    /// was. The first redirect in a chain wins.
    pub redirected: Option<RedirectReason>,
}

/// The only navigator error: the redirect budget ran out, meaning the
/// route table forwards in a cycle. Guard outcomes never produce this.
#[derive(Debug, PartialEq, Eq)]
pub enum NavError {
    RedirectLoop { path: String },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::RedirectLoop { path } => {
                write!(f, "Redirect loop while navigating to '{}'", path)
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Drives navigations through resolution, the guard, and title projection.
pub struct Navigator {
    table: RouteTable,
    store: Arc<dyn CredentialStore>,
    session: AuthSession,
    projector: TitleProjector,
    sign_in_path: String,
    current: Option<Navigation>,
}

impl Navigator {
    pub fn new(
        table: RouteTable,
        store: Arc<dyn CredentialStore>,
        config: &NavigationConfig,
    ) -> Self {
        Navigator {
            table,
            store,
            session: AuthSession::new(),
            projector: TitleProjector::new(config.title_suffix.clone()),
            sign_in_path: config.sign_in_path.clone(),
            current: None,
        }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// The last committed navigation, if any.
    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Cold-start hydration: rebuild the in-memory identity from storage
    /// before the first navigation.
    pub async fn hydrate_session(&mut self) {
        self.session.hydrate_from_store(self.store.as_ref()).await;
    }

    /// Sign-in entry point for the credential submission flow.
    pub async fn sign_in(&mut self, token: &str, user: User) -> Result<(), String> {
        self.session.sign_in(self.store.as_ref(), token, user).await
    }

    pub async fn sign_out(&mut self) -> Result<(), String> {
        self.session.sign_out(self.store.as_ref()).await
    }

    /// Drive one navigation to its committed destination. Total apart from
    /// a misconfigured table: auth failures commit to sign-in, unmatched
    /// paths follow the not-found policy.
    pub async fn navigate(&mut self, path: &str) -> Result<Navigation, NavError> {
        let mut target = path.to_string();
        let mut redirected: Option<RedirectReason> = None;

        for _ in 0..MAX_REDIRECTS {
            let Some(resolved) = self.table.resolve(&target) else {
                debug!("No route matched '{}', applying not-found policy", target);
                redirected.get_or_insert(RedirectReason::UnmatchedRoute);
                target = self.sign_in_path.clone();
                continue;
            };

            // Route-level redirect: the catch-all not-found entry forwards
            // before the guard runs.
            if let Some(next) = resolved.route.redirect {
                debug!(
                    "Route '{}' forwards '{}' -> '{}'",
                    resolved.route.name, target, next
                );
                redirected.get_or_insert(RedirectReason::UnmatchedRoute);
                target = next.to_string();
                continue;
            }

            // The store is consulted only for guarded routes; public
            // navigation never touches it.
            let snapshot = if resolved.route.meta.requires_auth {
                self.store.read().await
            } else {
                StoredCredentials::Absent
            };

            // Side effects precede the decision: a valid pair refreshes the
            // session (this is what repopulates identity after a reload),
            // anything else clears session and store together.
            if resolved.route.meta.requires_auth {
                match &snapshot {
                    StoredCredentials::Present(credentials) => {
                        self.session.hydrate(credentials.user.clone());
                    }
                    StoredCredentials::Absent | StoredCredentials::Corrupt => {
                        self.session.clear();
                        if let Err(e) = self.store.clear().await {
                            warn!("Failed to clear credential store: {}", e);
                        }
                    }
                }
            }

            match decide(
                &resolved.route.meta,
                self.session.is_authenticated(),
                &snapshot,
                &self.sign_in_path,
            ) {
                Decision::Proceed => {
                    let title = self
                        .projector
                        .project(&resolved.route.meta.title, &resolved.params);
                    let navigation = Navigation {
                        route_name: resolved.route.name,
                        view: resolved.route.view,
                        path: target.clone(),
                        params: resolved.params,
                        title,
                        redirected,
                    };
                    info!(
                        "Navigation committed to '{}' ({})",
                        navigation.path, navigation.route_name
                    );
                    self.current = Some(navigation.clone());
                    return Ok(navigation);
                }
                Decision::Redirect { target: next, reason } => {
                    debug!("Guard redirected '{}' -> '{}' ({:?})", target, next, reason);
                    redirected.get_or_insert(reason);
                    target = next;
                }
            }
        }

        warn!("Redirect budget exhausted at '{}'", target);
        Err(NavError::RedirectLoop { path: target })
    }
}
