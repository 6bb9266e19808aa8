//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Upper bound for `token_validity_hours` (ten years).
pub const MAX_TOKEN_VALIDITY_HOURS: u64 = 87_600;

/// Token and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for HS256 token signing.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// How long an issued token stays valid, in hours.
    #[serde(default = "default_token_validity")]
    pub token_validity_hours: u64,
    /// Minimum age, in whole years, required to register.
    #[serde(default = "default_minimum_age")]
    pub minimum_age: u32,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Whether `/users/a-register` accepts new administrators.
    #[serde(default = "default_true")]
    pub admin_registration_enabled: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_validity_hours: default_token_validity(),
            minimum_age: default_minimum_age(),
            password_min_length: default_password_min(),
            admin_registration_enabled: default_true(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION_0123456789abcdef".to_string()
}

fn default_token_validity() -> u64 {
    5
}

fn default_minimum_age() -> u32 {
    18
}

fn default_password_min() -> usize {
    8
}

fn default_true() -> bool {
    true
}
