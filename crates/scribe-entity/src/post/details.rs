//! Composite read models: a post with its author and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scribe_core::types::{CommentId, PostId};

use crate::user::AuthorSummary;

/// A post as presented to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetails {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorSummary,
    pub categories: Vec<String>,
    /// Oldest first.
    pub comments: Vec<CommentDetails>,
}

/// A comment as presented to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDetails {
    pub id: CommentId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorSummary,
}
