//! Token issuance and validation entry point used by the services and
//! request extractors.

use chrono::{DateTime, Utc};

use scribe_core::config::AuthConfig;
use scribe_core::error::AppError;
use scribe_core::result::AppResult;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;

/// Issues tokens for authenticated users and checks presented tokens.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Build the service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }

    /// Issue a token for `subject` valid from now.
    pub fn issue(&self, subject: &str) -> AppResult<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for `subject` as if the clock read `issued_at`.
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> AppResult<String> {
        let token = self.encoder.encode_at(subject, issued_at)?;
        tracing::debug!(subject, "Issued token");
        Ok(token)
    }

    /// Whether `token` is genuine, names `expected_subject`, and is unexpired now.
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        self.validate_at(token, expected_subject, Utc::now())
    }

    /// Same as [`validate`](Self::validate) with an explicit clock reading.
    /// Never errors: any failure yields `false`.
    pub fn validate_at(&self, token: &str, expected_subject: &str, now: DateTime<Utc>) -> bool {
        match self.decoder.verify(token) {
            Ok(claims) => claims.sub == expected_subject && !claims.is_expired_at(now),
            Err(_) => false,
        }
    }

    /// Verify the signature and apply `selector` to the claims.
    /// Expiry is not checked.
    pub fn extract_claim<T, F>(&self, token: &str, selector: F) -> AppResult<T>
    where
        F: FnOnce(&Claims) -> T,
    {
        let claims = self.decoder.verify(token)?;
        Ok(selector(&claims))
    }

    /// The subject (user email) of a genuine token.
    pub fn extract_subject(&self, token: &str) -> AppResult<String> {
        self.extract_claim(token, |c| c.sub.clone())
    }

    /// The expiry instant of a genuine token.
    pub fn extract_expiration(&self, token: &str) -> AppResult<DateTime<Utc>> {
        self.extract_claim(token, Claims::expires_at)?
            .ok_or_else(|| AppError::token_invalid("Token expiry is out of range"))
    }

    /// Fully verify a bearer token, including expiry.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        self.decode_at(token, Utc::now())
    }

    /// Same as [`decode`](Self::decode) with an explicit clock reading.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> AppResult<Claims> {
        let claims = self.decoder.verify(token)?;
        if claims.is_expired_at(now) {
            return Err(AppError::token_invalid("Token has expired"));
        }
        Ok(claims)
    }
}
