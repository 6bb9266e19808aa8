//! # scribe-auth
//!
//! Authentication and authorization for Scribe.
//!
//! ## Modules
//!
//! - `jwt`: HS256 token issuance, verification, and claim extraction
//! - `password`: Argon2id password hashing and policy enforcement
//! - `credentials`: username/password authentication against the user store
//! - `session`: the per-request authentication state
//! - `policy`: ownership and role checks guarding every mutation

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod session;

pub use credentials::CredentialVerifier;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenService};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::AuthorizationPolicy;
pub use session::Session;
