//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, verifies it, and resolves its subject to a stored user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use scribe_auth::Session;
use scribe_core::error::AppError;
use scribe_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated request context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.tokens.decode(token)?;

        // the account may have been deleted since the token was issued
        let user = state
            .users
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AppError::token_invalid("Token subject no longer exists"))?;

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(AuthUser(RequestContext::new(
            Session::Authenticated(user),
            ip_address,
            user_agent,
        )))
    }
}
