//! The navigation guard: a pure, total decision over route metadata, the
//! session state, and a credential store snapshot. The side effects a
//! decision implies (store clearing, session hydration) live in the
//! navigator, so the decision itself stays independently testable.

use crate::models::StoredCredentials;
use crate::routes::RouteMeta;

/// Why a navigation was redirected instead of committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// Token or user absent on a route that requires authentication.
    MissingCredential,
    /// The stored user record did not parse; handled like a missing one.
    CorruptCredential,
    /// No pattern matched the path; the not-found policy applies.
    UnmatchedRoute,
    /// An authenticated user landed on a route carrying `redirect_on_auth`.
    AlreadyAuthenticated,
}

/// The guard's verdict. Never an error: every failure is a redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect {
        target: String,
        reason: RedirectReason,
    },
}

/// Decide whether a navigation may commit.
///
/// Routes that do not require authentication proceed unconditionally,
/// except that an authenticated session is bounced off routes carrying
/// `redirect_on_auth` so sign-in is not re-rendered. Guarded routes
/// proceed exactly when the snapshot holds a complete pair. Token presence
/// is treated as validity; an expired-but-present token is only discovered
/// when a later API call fails, and that error path is not this layer's.
pub fn decide(
    meta: &RouteMeta,
    session_authenticated: bool,
    credentials: &StoredCredentials,
    sign_in_path: &str,
) -> Decision {
    if !meta.requires_auth {
        if let Some(target) = &meta.redirect_on_auth {
            if session_authenticated {
                return Decision::Redirect {
                    target: target.clone(),
                    reason: RedirectReason::AlreadyAuthenticated,
                };
            }
        }
        return Decision::Proceed;
    }

    match credentials {
        StoredCredentials::Present(_) => Decision::Proceed,
        StoredCredentials::Absent => Decision::Redirect {
            target: sign_in_path.to_string(),
            reason: RedirectReason::MissingCredential,
        },
        StoredCredentials::Corrupt => Decision::Redirect {
            target: sign_in_path.to_string(),
            reason: RedirectReason::CorruptCredential,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Credentials, User};
    use crate::routes::RouteMeta;

    fn present() -> StoredCredentials {
        StoredCredentials::Present(Credentials::new("abc", User::new(1, "A")))
    }

    /// Public routes proceed no matter what the store holds.
    #[test]
    fn test_public_route_always_proceeds() {
        let meta = RouteMeta::new("Shared Album").public();
        for snapshot in [StoredCredentials::Absent, StoredCredentials::Corrupt, present()] {
            assert_eq!(decide(&meta, false, &snapshot, "/login"), Decision::Proceed);
        }
    }

    /// An authenticated session is bounced off sign-in.
    #[test]
    fn test_redirect_on_auth() {
        let meta = RouteMeta::new("Sign In").public().redirect_on_auth("/home");

        assert_eq!(decide(&meta, false, &StoredCredentials::Absent, "/login"), Decision::Proceed);
        assert_eq!(
            decide(&meta, true, &StoredCredentials::Absent, "/login"),
            Decision::Redirect {
                target: "/home".to_string(),
                reason: RedirectReason::AlreadyAuthenticated,
            }
        );
    }

    /// Guarded routes proceed exactly when the pair is complete.
    #[test]
    fn test_guarded_route() {
        let meta = RouteMeta::new("Home");

        assert_eq!(decide(&meta, false, &present(), "/login"), Decision::Proceed);
        assert_eq!(
            decide(&meta, false, &StoredCredentials::Absent, "/login"),
            Decision::Redirect {
                target: "/login".to_string(),
                reason: RedirectReason::MissingCredential,
            }
        );
        assert_eq!(
            decide(&meta, false, &StoredCredentials::Corrupt, "/login"),
            Decision::Redirect {
                target: "/login".to_string(),
                reason: RedirectReason::CorruptCredential,
            }
        );
    }

    /// The store snapshot, not the session, is authoritative on guarded
    /// routes: a stale session without stored credentials is still denied.
    #[test]
    fn test_stale_session_denied() {
        let meta = RouteMeta::new("Home");
        assert_eq!(
            decide(&meta, true, &StoredCredentials::Absent, "/login"),
            Decision::Redirect {
                target: "/login".to_string(),
                reason: RedirectReason::MissingCredential,
            }
        );
    }
}
