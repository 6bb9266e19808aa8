//! Translation of sqlx failures into [`AppError`].

use scribe_core::error::{AppError, ConflictKind, ErrorKind};

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE class for all integrity constraint violations.
const INTEGRITY_CLASS: &str = "23";

/// Classify a SQLSTATE code as an integrity violation, if it is one.
pub fn classify_sqlstate(code: &str) -> Option<ConflictKind> {
    match code {
        UNIQUE_VIOLATION => Some(ConflictKind::DuplicateEntry),
        FOREIGN_KEY_VIOLATION => Some(ConflictKind::ForeignKey),
        c if c.starts_with(INTEGRITY_CLASS) => Some(ConflictKind::Other),
        _ => None,
    }
}

/// Map a sqlx error to an [`AppError`], surfacing constraint violations as
/// `StoreConflict` and everything else as a database error with `context`.
pub fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    let conflict = match &err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref().and_then(classify_sqlstate),
        _ => None,
    };

    match conflict {
        Some(kind) => {
            tracing::warn!(error = %err, ?kind, "{context}: integrity constraint violated");
            let mut app = AppError::store_conflict(kind);
            app.source = Some(Box::new(err));
            app
        }
        None => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_sqlstate() {
        assert_eq!(classify_sqlstate("23505"), Some(ConflictKind::DuplicateEntry));
        assert_eq!(classify_sqlstate("23503"), Some(ConflictKind::ForeignKey));
        assert_eq!(classify_sqlstate("23502"), Some(ConflictKind::Other));
        assert_eq!(classify_sqlstate("42P01"), None);
    }

    #[test]
    fn test_non_database_errors_are_database_kind() {
        let err = map_sqlx_error("Failed to find post", sqlx::Error::RowNotFound);
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to find post");
    }
}
