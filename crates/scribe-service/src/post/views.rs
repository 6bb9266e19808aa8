//! Joins posts with their authors and comments.

use std::collections::HashMap;

use scribe_core::result::AppResult;
use scribe_core::types::{PostId, UserId};
use scribe_database::Stores;
use scribe_entity::comment::Comment;
use scribe_entity::post::{CommentDetails, Post, PostDetails};
use scribe_entity::user::AuthorSummary;

/// Builds [`PostDetails`] from stored rows with one query per table.
#[derive(Debug, Clone)]
pub struct ViewAssembler {
    stores: Stores,
}

impl ViewAssembler {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Attach authors and comments, preserving the order of `posts`.
    ///
    /// Rows whose author disappeared concurrently are skipped.
    pub async fn posts(&self, posts: Vec<Post>) -> AppResult<Vec<PostDetails>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }
        let post_ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
        let comments = self.stores.comments.find_by_post_ids(&post_ids).await?;

        let mut author_ids: Vec<UserId> = posts
            .iter()
            .map(|p| p.author_id)
            .chain(comments.iter().map(|c| c.author_id))
            .collect();
        author_ids.sort();
        author_ids.dedup();
        let authors: HashMap<UserId, AuthorSummary> = self
            .stores
            .users
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.summary()))
            .collect();

        let mut by_post: HashMap<PostId, Vec<CommentDetails>> = HashMap::new();
        for comment in comments {
            let post_id = comment.post_id;
            if let Some(view) = comment_view(comment, &authors) {
                by_post.entry(post_id).or_default().push(view);
            }
        }

        Ok(posts
            .into_iter()
            .filter_map(|post| {
                let author = authors.get(&post.author_id)?.clone();
                Some(PostDetails {
                    comments: by_post.remove(&post.id).unwrap_or_default(),
                    id: post.id,
                    title: post.title,
                    content: post.content,
                    created_at: post.created_at,
                    updated_at: post.updated_at,
                    author,
                    categories: post.categories,
                })
            })
            .collect())
    }

    /// Details of a single post.
    pub async fn post(&self, post: Post) -> AppResult<Option<PostDetails>> {
        Ok(self.posts(vec![post]).await?.pop())
    }
}

/// A comment with its author, if the author is known.
fn comment_view(
    comment: Comment,
    authors: &HashMap<UserId, AuthorSummary>,
) -> Option<CommentDetails> {
    let author = authors.get(&comment.author_id)?.clone();
    Some(comment_details(comment, author))
}

pub(crate) fn comment_details(comment: Comment, author: AuthorSummary) -> CommentDetails {
    CommentDetails {
        id: comment.id,
        content: comment.content,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        author,
    }
}
