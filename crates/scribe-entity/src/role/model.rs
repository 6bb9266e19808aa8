//! Role entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::RoleId;

/// Name of the administrator role.
pub const ADMIN: &str = "ADMIN";

/// Name of the regular author role.
pub const USER: &str = "USER";

/// A named grant that can be attached to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: RoleId,
    /// Unique, upper-case role name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

impl Role {
    /// Canonical form of a role name: trimmed and upper-case.
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_uppercase()
    }
}

/// Data required to create or rewrite a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRole {
    /// Role name; normalized on construction.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

impl NewRole {
    /// Build a role payload with a normalized name.
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Self {
            name: Role::normalize_name(name),
            description: description.into(),
        }
    }

    /// The roles every installation starts with.
    pub fn defaults() -> Vec<NewRole> {
        vec![
            NewRole::new(ADMIN, "Administrator of this app."),
            NewRole::new(USER, "User of this app."),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_normalized() {
        assert_eq!(NewRole::new("  editor ", "x").name, "EDITOR");
        assert_eq!(Role::normalize_name("Admin"), ADMIN);
    }

    #[test]
    fn test_defaults_contain_admin_and_user() {
        let names: Vec<_> = NewRole::defaults().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec![ADMIN.to_string(), USER.to_string()]);
    }
}
