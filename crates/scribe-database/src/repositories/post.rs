//! Post repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_core::types::PostId;
use scribe_entity::post::{NewPost, Post};

use super::PostStore;
use crate::error::map_sqlx_error;

/// PostgreSQL repository for posts.
#[derive(Debug, Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostRepository {
    async fn find_by_id(&self, id: PostId) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find post by id", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list posts", e))
    }

    async fn find_by_author_email(&self, email: &str) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>(
            "SELECT p.* FROM posts p JOIN users u ON u.id = p.author_id \
             WHERE LOWER(u.email) = LOWER($1) ORDER BY p.created_at DESC, p.id DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list posts by author", e))
    }

    async fn find_by_categories(&self, categories: &[String]) -> AppResult<Vec<Post>> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }
        // && is array overlap, so each matching row is returned once
        sqlx::query_as::<_, Post>(
            "SELECT * FROM posts WHERE categories && $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(categories)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list posts by categories", e))
    }

    async fn create(&self, data: &NewPost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, created_at, updated_at, author_id, categories) \
             VALUES ($1, $2, $3, $3, $4, $5) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.created_at)
        .bind(data.author_id)
        .bind(&data.categories)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to create post", e))
    }

    async fn update(&self, post: &Post) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET title = $2, content = $3, categories = $4, updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.categories)
        .bind(post.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update post", e))?
        .ok_or_else(|| AppError::not_found(format!("Post not found: {}", post.id)))
    }

    async fn delete(&self, id: PostId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete post", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_by_author_email(&self, email: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM posts WHERE author_id IN \
             (SELECT id FROM users WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to delete posts by author", e))?;
        Ok(result.rows_affected())
    }
}
