//! Blog post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::{PostId, UserId};

/// A blog post owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// Title.
    pub title: String,
    /// Body text; never blank.
    pub content: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last modified.
    pub updated_at: DateTime<Utc>,
    /// The owning user.
    pub author_id: UserId,
    /// Category labels, without duplicates.
    pub categories: Vec<String>,
}

/// Data required to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// The owning user.
    pub author_id: UserId,
    /// Category labels.
    pub categories: Vec<String>,
    /// Creation instant, also used as the initial modification instant.
    pub created_at: DateTime<Utc>,
}

/// Sort and de-duplicate category labels, dropping blank ones.
pub fn normalize_categories<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = labels
        .into_iter()
        .map(|l| l.as_ref().trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
