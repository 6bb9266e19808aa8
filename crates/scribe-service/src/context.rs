//! Request context carrying the session of the acting user.

use chrono::{DateTime, Utc};

use scribe_auth::Session;
use scribe_entity::user::User;

/// Context for the current request.
///
/// Built by the request extractors and passed into service methods so that
/// every operation knows who is acting. There is no global identity holder.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Who is acting.
    pub session: Session,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context stamped with the current time.
    pub fn new(session: Session, ip_address: String, user_agent: Option<String>) -> Self {
        Self {
            session,
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }

    /// Context for an authenticated user with no transport details.
    pub fn for_user(user: User) -> Self {
        Self::new(Session::Authenticated(user), "unknown".to_string(), None)
    }

    /// Context with no verified identity.
    pub fn anonymous() -> Self {
        Self::new(Session::Anonymous, "unknown".to_string(), None)
    }

    /// The acting user, if authenticated.
    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }
}
