mod common;

use common::{build_navigator, test_user};
use hifriends_nav::guard::RedirectReason;
use hifriends_nav::models::StoredCredentials;
use hifriends_nav::navigator::Navigator;
use hifriends_nav::routes::album_routes;
use hifriends_nav::config::NavigationConfig;
use hifriends_nav::store::{CredentialStore, MemoryStore};
use std::sync::Arc;

/// Empty store, guarded target: the navigation lands on sign-in and the
/// original target is discarded.
#[tokio::test]
async fn test_anonymous_guarded_navigation_redirects_to_sign_in() {
    let (mut navigator, _store) = build_navigator();

    let navigation = navigator.navigate("/home").await.unwrap();

    assert_eq!(navigation.route_name, "Login");
    assert_eq!(navigation.path, "/login");
    assert_eq!(navigation.redirected, Some(RedirectReason::MissingCredential));
    assert_eq!(navigation.title, "Sign In // hi!friends");
    assert!(!navigator.session().is_authenticated());
}

/// Stored pair, guarded target: the navigation proceeds and the session is
/// repopulated from storage without any sign-in call.
#[tokio::test]
async fn test_stored_pair_allows_guarded_navigation() {
    let (mut navigator, store) = build_navigator();
    store.write("abc", &test_user()).await.unwrap();

    let navigation = navigator.navigate("/home").await.unwrap();

    assert_eq!(navigation.route_name, "Home");
    assert_eq!(navigation.redirected, None);
    assert_eq!(navigator.session().current_user().unwrap().id, 1);
}

/// Corrupt user payload: the store ends up fully cleared and the
/// navigation is redirected to sign-in.
#[tokio::test]
async fn test_corrupt_user_record_clears_store_and_redirects() {
    let (mut navigator, store) = build_navigator();
    store.seed_raw("abc", "{not json");

    let navigation = navigator.navigate("/albums").await.unwrap();

    assert_eq!(navigation.route_name, "Login");
    assert_eq!(navigation.redirected, Some(RedirectReason::CorruptCredential));
    assert_eq!(store.read().await, StoredCredentials::Absent);
    assert!(!navigator.session().is_authenticated());
}

/// An authenticated user visiting sign-in is bounced to home instead.
#[tokio::test]
async fn test_authenticated_user_bounced_off_sign_in() {
    let (mut navigator, _store) = build_navigator();
    navigator.sign_in("abc", test_user()).await.unwrap();

    let navigation = navigator.navigate("/login").await.unwrap();

    assert_eq!(navigation.route_name, "Home");
    assert_eq!(navigation.path, "/home");
    assert_eq!(
        navigation.redirected,
        Some(RedirectReason::AlreadyAuthenticated)
    );
}

/// A share-token route bypasses authentication entirely: empty store,
/// navigation proceeds, session stays anonymous.
#[tokio::test]
async fn test_public_token_route_bypasses_auth() {
    let (mut navigator, _store) = build_navigator();

    let navigation = navigator.navigate("/public/album/42/tok-xyz").await.unwrap();

    assert_eq!(navigation.route_name, "PublicAlbum");
    assert_eq!(navigation.redirected, None);
    assert_eq!(navigation.params["id"], "42");
    assert_eq!(navigation.params["token"], "tok-xyz");
    assert!(!navigator.session().is_authenticated());
}

/// Public navigation never consults the store, so even a corrupt entry
/// is left untouched by it.
#[tokio::test]
async fn test_public_navigation_ignores_store_state() {
    let (mut navigator, store) = build_navigator();
    store.seed_raw("abc", "{not json");

    let navigation = navigator.navigate("/public/album/42/tok-xyz").await.unwrap();

    assert_eq!(navigation.route_name, "PublicAlbum");
    assert_eq!(store.read().await, StoredCredentials::Corrupt);
}

/// An unmatched path follows the not-found policy into sign-in.
#[tokio::test]
async fn test_unmatched_path_redirects_to_sign_in() {
    let (mut navigator, _store) = build_navigator();

    let navigation = navigator.navigate("/definitely/not/a/route").await.unwrap();

    assert_eq!(navigation.route_name, "Login");
    assert_eq!(navigation.redirected, Some(RedirectReason::UnmatchedRoute));
}

/// An unmatched path for an authenticated user chains through sign-in and
/// on to home; the recorded reason is the first redirect.
#[tokio::test]
async fn test_unmatched_path_while_authenticated_lands_on_home() {
    let (mut navigator, _store) = build_navigator();
    navigator.sign_in("abc", test_user()).await.unwrap();

    let navigation = navigator.navigate("/definitely/not/a/route").await.unwrap();

    assert_eq!(navigation.route_name, "Home");
    assert_eq!(navigation.redirected, Some(RedirectReason::UnmatchedRoute));
}

/// A second navigator over the same store simulates a reload: the session
/// repopulates on the first guarded navigation.
#[tokio::test]
async fn test_reload_repopulates_session() {
    let (mut first, store) = build_navigator();
    first.sign_in("abc", test_user()).await.unwrap();

    let mut second = Navigator::new(
        album_routes(),
        store.clone() as Arc<dyn CredentialStore>,
        &NavigationConfig::default(),
    );
    assert!(!second.session().is_authenticated());

    let navigation = second.navigate("/album/42/image/7").await.unwrap();

    assert_eq!(navigation.route_name, "ImageDetail");
    assert_eq!(navigation.params["image"], "7");
    assert!(second.session().is_authenticated());
}

/// Sign-out drops both the session and the store; the next guarded
/// navigation is denied again.
#[tokio::test]
async fn test_sign_out_returns_to_anonymous() {
    let (mut navigator, store) = build_navigator();
    navigator.sign_in("abc", test_user()).await.unwrap();
    navigator.navigate("/home").await.unwrap();

    navigator.sign_out().await.unwrap();
    assert_eq!(store.read().await, StoredCredentials::Absent);

    let navigation = navigator.navigate("/albums").await.unwrap();
    assert_eq!(navigation.route_name, "Login");
    assert_eq!(navigation.redirected, Some(RedirectReason::MissingCredential));
}

/// Query strings and fragments are ignored by resolution and the guard.
#[tokio::test]
async fn test_query_and_fragment_ignored() {
    let (mut navigator, store) = build_navigator();
    store.write("abc", &test_user()).await.unwrap();

    let navigation = navigator.navigate("/album/42?from=home#top").await.unwrap();

    assert_eq!(navigation.route_name, "AlbumDetail");
    assert_eq!(navigation.params["id"], "42");
}

/// A table whose sign-in path never resolves exhausts the redirect budget
/// instead of spinning forever.
#[tokio::test]
async fn test_redirect_loop_is_an_error() {
    use hifriends_nav::navigator::NavError;
    use hifriends_nav::routes::{Route, RouteMeta, RouteTable, ViewId};

    let table = RouteTable::new(vec![Route::new(
        "Home",
        "/home",
        ViewId::new("Home"),
        RouteMeta::new("Home"),
    )
    .unwrap()])
    .unwrap();
    let store = Arc::new(MemoryStore::new());
    let mut navigator = Navigator::new(
        table,
        store as Arc<dyn CredentialStore>,
        &NavigationConfig::default(),
    );

    let result = navigator.navigate("/home").await;
    assert!(matches!(result, Err(NavError::RedirectLoop { .. })));
}

/// The committed navigation is recorded as current.
#[tokio::test]
async fn test_current_navigation_tracked() {
    let (mut navigator, _store) = build_navigator();
    navigator.sign_in("abc", test_user()).await.unwrap();

    navigator.navigate("/albums").await.unwrap();

    let current = navigator.current().unwrap();
    assert_eq!(current.route_name, "Albums");
    assert_eq!(current.title, "All Albums // hi!friends");
}
