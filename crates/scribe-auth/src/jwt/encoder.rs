//! JWT token creation with a configurable validity window.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use scribe_core::config::{AuthConfig, MAX_TOKEN_VALIDITY_HOURS};
use scribe_core::error::AppError;

use super::claims::Claims;

/// Creates signed HS256 tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// How long a token stays valid after issuance.
    validity: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("validity", &self.validity)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let hours = config.token_validity_hours.min(MAX_TOKEN_VALIDITY_HOURS) as i64;
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            validity: Duration::hours(hours),
        }
    }

    /// The validity window added to the issue instant.
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Signs a token for `subject` issued at `issued_at`.
    pub fn encode_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let exp = issued_at
            .checked_add_signed(self.validity)
            .ok_or_else(|| AppError::internal("Token expiry is out of range"))?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
