use std::sync::Arc;

use hifriends_nav::config::NavigationConfig;
use hifriends_nav::models::User;
use hifriends_nav::navigator::Navigator;
use hifriends_nav::routes::album_routes;
use hifriends_nav::store::{CredentialStore, MemoryStore};

pub fn test_user() -> User {
    User::new(1, "A")
}

/// Build a navigator over the album route table and an in-memory store,
/// returning the store separately so tests can seed or inspect it.
pub fn build_navigator() -> (Navigator, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let navigator = Navigator::new(
        album_routes(),
        store.clone() as Arc<dyn CredentialStore>,
        &NavigationConfig::default(),
    );
    (navigator, store)
}
