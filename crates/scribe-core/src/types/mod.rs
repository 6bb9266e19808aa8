//! Core type definitions used across the Scribe workspace.

pub mod id;
pub mod response;

pub use id::*;
pub use response::ApiResponse;
