//! Comment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_core::types::{CommentId, PostId};
use scribe_entity::comment::{Comment, NewComment};

use super::CommentStore;
use crate::error::map_sqlx_error;

/// PostgreSQL repository for comments.
#[derive(Debug, Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for PgCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find comment by id", e))
    }

    async fn find_by_post_ids(&self, post_ids: &[PostId]) -> AppResult<Vec<Comment>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = post_ids.iter().map(|id| id.get()).collect();
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE post_id = ANY($1) ORDER BY created_at, id",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list comments", e))
    }

    async fn create(&self, data: &NewComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (post_id, author_id, content, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) RETURNING *",
        )
        .bind(data.post_id)
        .bind(data.author_id)
        .bind(&data.content)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to create comment", e))
    }

    async fn update(&self, comment: &Comment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "UPDATE comments SET content = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(comment.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update comment", e))?
        .ok_or_else(|| AppError::not_found(format!("Comment not found: {}", comment.id)))
    }

    async fn delete(&self, id: CommentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete comment", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_by_post(&self, post_id: PostId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete comments of post", e))?;
        Ok(result.rows_affected())
    }
}
