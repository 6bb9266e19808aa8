//! User repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_core::types::UserId;
use scribe_entity::user::{CreateUser, User};

use super::UserStore;
use crate::error::map_sqlx_error;

/// PostgreSQL repository for users and their role grants.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fill in the role names of the given users.
    async fn attach_roles(&self, mut users: Vec<User>) -> AppResult<Vec<User>> {
        if users.is_empty() {
            return Ok(users);
        }
        let ids: Vec<i64> = users.iter().map(|u| u.id.get()).collect();

        let rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT ur.user_id, r.name FROM user_roles ur \
             JOIN roles r ON r.id = ur.role_id \
             WHERE ur.user_id = ANY($1) ORDER BY r.name",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to load user roles", e))?;

        let mut by_user: HashMap<i64, Vec<String>> = HashMap::new();
        for (user_id, name) in rows {
            by_user.entry(user_id).or_default().push(name);
        }
        for user in &mut users {
            user.roles = by_user.remove(&user.id.get()).unwrap_or_default();
        }
        Ok(users)
    }

    async fn attach_roles_one(&self, user: Option<User>) -> AppResult<Option<User>> {
        match user {
            Some(u) => Ok(self.attach_roles(vec![u]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find user by email", e))?;
        self.attach_roles_one(user).await
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find user by id", e))?;
        self.attach_roles_one(user).await
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        let users = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(&raw)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find users by ids", e))?;
        self.attach_roles(users).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to check user email", e))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("Failed to begin transaction", e))?;

        let now = Utc::now();
        let mut user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, gender, date_of_birth, age, \
             firstname, lastname, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.gender)
        .bind(data.date_of_birth)
        .bind(data.age)
        .bind(&data.firstname)
        .bind(&data.lastname)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("Failed to create user", e))?;

        let granted = sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) \
             SELECT $1, id FROM roles WHERE name = ANY($2)",
        )
        .bind(user.id)
        .bind(&data.roles)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("Failed to grant user roles", e))?
        .rows_affected();

        if granted as usize != data.roles.len() {
            return Err(AppError::not_found(format!(
                "Role not found: {}",
                data.roles.join(", ")
            )));
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("Failed to commit user creation", e))?;

        user.roles = data.roles.clone();
        user.roles.sort();
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET email = $2, password_hash = $3, gender = $4, \
             date_of_birth = $5, age = $6, firstname = $7, lastname = $8, updated_at = $9 \
             WHERE id = $1 RETURNING *",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.gender)
        .bind(user.date_of_birth)
        .bind(user.age)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(user.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update user", e))?
        .ok_or_else(|| AppError::not_found(format!("User not found: {}", user.email)))?;

        Ok(User {
            roles: user.roles.clone(),
            ..updated
        })
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<bool> {
        // posts, comments and grants go with the user through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete user", e))?;
        Ok(result.rows_affected() > 0)
    }
}
