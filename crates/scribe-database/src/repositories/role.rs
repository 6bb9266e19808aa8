//! Role repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_core::types::RoleId;
use scribe_entity::role::{NewRole, Role};

use super::RoleStore;
use crate::error::map_sqlx_error;

/// PostgreSQL repository for roles.
#[derive(Debug, Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for PgRoleRepository {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE name = $1")
            .bind(Role::normalize_name(name))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find role by name", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list roles", e))
    }

    async fn create(&self, data: &NewRole) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "INSERT INTO roles (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(Role::normalize_name(&data.name))
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to create role", e))
    }

    async fn update(&self, id: RoleId, data: &NewRole) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "UPDATE roles SET name = $2, description = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Role::normalize_name(&data.name))
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update role", e))?
        .ok_or_else(|| AppError::not_found(format!("Role not found: {id}")))
    }
}
