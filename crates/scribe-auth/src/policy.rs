//! Ownership and role checks.
//!
//! The boolean forms answer the question; the `ensure_*` forms turn a
//! denial into an `Unauthorized` error and log it. Services call an
//! `ensure_*` method before every store mutation.

use tracing::warn;

use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_entity::role::Role;
use scribe_entity::user::User;

use crate::session::Session;

/// Stateless authorization decisions over a [`Session`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationPolicy;

impl AuthorizationPolicy {
    pub fn new() -> Self {
        Self
    }

    /// True iff the session is authenticated as exactly `owner_email`.
    pub fn can_mutate(&self, session: &Session, owner_email: &str) -> bool {
        session.email() == Some(owner_email)
    }

    /// True iff the session is authenticated and was granted `role`.
    pub fn require_role(&self, session: &Session, role: &str) -> bool {
        session
            .user()
            .is_some_and(|u| u.has_role(&Role::normalize_name(role)))
    }

    /// The acting user, or `Unauthorized` for anonymous sessions.
    pub fn ensure_authenticated<'a>(&self, session: &'a Session) -> AppResult<&'a User> {
        session.user().ok_or_else(|| {
            warn!("Rejected anonymous request to a protected operation");
            AppError::unauthorized("Authentication is required.")
        })
    }

    /// The acting user, if it owns the resource owned by `owner_email`.
    pub fn ensure_can_mutate<'a>(
        &self,
        session: &'a Session,
        owner_email: &str,
    ) -> AppResult<&'a User> {
        let user = self.ensure_authenticated(session)?;
        if self.can_mutate(session, owner_email) {
            Ok(user)
        } else {
            warn!(actor = %user.email, owner = %owner_email, "Ownership check failed");
            Err(AppError::unauthorized(
                "You are not allowed to modify a resource you do not own.",
            ))
        }
    }

    /// The acting user, if it was granted `role`.
    pub fn ensure_role<'a>(&self, session: &'a Session, role: &str) -> AppResult<&'a User> {
        let user = self.ensure_authenticated(session)?;
        if self.require_role(session, role) {
            Ok(user)
        } else {
            warn!(actor = %user.email, role, "Role check failed");
            Err(AppError::unauthorized(format!(
                "This operation requires the {} role.",
                Role::normalize_name(role)
            )))
        }
    }
}
