//! Registration, login, and self-service account management.

pub mod service;

pub use service::{AuthOutcome, UserInput, UserService};
