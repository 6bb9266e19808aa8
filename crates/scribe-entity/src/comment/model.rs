//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::{CommentId, PostId, UserId};

/// A comment left by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: CommentId,
    /// The post this comment belongs to.
    pub post_id: PostId,
    /// The user who wrote it.
    pub author_id: UserId,
    /// Body text; never blank.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    /// Target post.
    pub post_id: PostId,
    /// Author.
    pub author_id: UserId,
    /// Body text.
    pub content: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}
