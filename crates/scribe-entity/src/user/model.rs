//! User entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::UserId;

use super::gender::Gender;

/// A registered identity. The email is the login name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique email address, used as the login name and token subject.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Self-declared gender.
    pub gender: Option<Gender>,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Age in whole years, derived from the date of birth at the last write.
    pub age: i32,
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Upper-case names of the roles granted to this user.
    #[sqlx(skip)]
    pub roles: Vec<String>,
}

impl User {
    /// Check whether the user was granted the given role.
    pub fn has_role(&self, role: &str) -> bool {
        let wanted = role.trim().to_uppercase();
        self.roles.iter().any(|r| *r == wanted)
    }

    /// Public author information.
    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            email: self.email.clone(),
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address (login name).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Self-declared gender.
    pub gender: Option<Gender>,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Age at registration.
    pub age: i32,
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Role names to grant; each must already exist.
    pub roles: Vec<String>,
}

/// The public face of a post or comment author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    /// Author email.
    pub email: String,
    /// Author given name.
    pub firstname: String,
    /// Author family name.
    pub lastname: String,
}
