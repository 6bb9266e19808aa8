//! Username/password authentication against the user store.

use std::sync::Arc;

use tracing::warn;

use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_database::UserStore;
use scribe_entity::user::User;

use crate::password::PasswordHasher;

/// Checks a username (email) and password against stored credentials.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl CredentialVerifier {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Resolve `username` to a stored user whose password matches.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_email(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {username}")))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(email = %user.email, "Password mismatch");
            return Err(AppError::unauthorized("Bad credentials."));
        }
        Ok(user)
    }
}
