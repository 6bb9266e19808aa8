//! # scribe-core
//!
//! Core crate for Scribe. Contains the configuration schema, typed
//! identifiers, the response envelope, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Scribe crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
