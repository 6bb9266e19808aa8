//! Per-request authentication state.

use scribe_entity::user::User;

/// Who is making a request.
///
/// A session becomes `Authenticated` only through a successful login or
/// registration, or through a valid bearer token whose subject still
/// resolves to a stored user. Nothing is kept server-side between requests.
#[derive(Debug, Clone, Default)]
pub enum Session {
    /// No verified identity.
    #[default]
    Anonymous,
    /// A verified, currently stored user.
    Authenticated(User),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    /// Email of the authenticated user, if any.
    pub fn email(&self) -> Option<&str> {
        self.user().map(|u| u.email.as_str())
    }
}
