//! Input checks shared by the services.

use scribe_core::error::AppError;
use scribe_core::result::AppResult;

/// Reject blank text, reporting `message` against `field`.
pub(crate) fn non_blank(value: &str, field: &str, message: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(field_error(field, message));
    }
    Ok(())
}

/// A validation error whose details map `field` to `message`.
pub(crate) fn field_error(field: &str, message: &str) -> AppError {
    AppError::validation(message).with_details(serde_json::json!({ field: message }))
}
