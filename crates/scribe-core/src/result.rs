//! Convenience result type alias for Scribe.

use crate::error::AppError;

/// A specialized `Result` type for Scribe operations.
pub type AppResult<T> = Result<T, AppError>;
