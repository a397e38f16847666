pub mod credentials;
pub mod user;

pub use credentials::{Credentials, StoredCredentials};
pub use user::User;
