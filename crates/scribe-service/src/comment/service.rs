//! Comment use cases.

use tracing::info;

use scribe_auth::AuthorizationPolicy;
use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_core::types::{CommentId, PostId};
use scribe_database::Stores;
use scribe_entity::comment::{Comment, NewComment};
use scribe_entity::post::CommentDetails;
use scribe_entity::user::User;

use crate::context::RequestContext;
use crate::post::service::{check_post_id, post_not_found};
use crate::post::views::comment_details;
use crate::validate::{field_error, non_blank};

/// Handles writing and removing comments.
#[derive(Debug, Clone)]
pub struct CommentService {
    stores: Stores,
    policy: AuthorizationPolicy,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(stores: Stores, policy: AuthorizationPolicy) -> Self {
        Self { stores, policy }
    }

    /// Comment on an existing post as the acting user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        post_id: PostId,
        content: &str,
    ) -> AppResult<CommentDetails> {
        let author = self.policy.ensure_authenticated(&ctx.session)?;
        check_post_id(post_id)?;
        non_blank(content, "content", "Content is required.")?;

        if self.stores.posts.find_by_id(post_id).await?.is_none() {
            return Err(post_not_found(post_id));
        }

        let comment = self
            .stores
            .comments
            .create(&NewComment {
                post_id,
                author_id: author.id,
                content: content.to_string(),
                created_at: ctx.request_time,
            })
            .await?;

        info!(comment_id = %comment.id, post_id = %post_id, author = %author.email, "Comment created");
        Ok(view(comment, author))
    }

    /// Rewrite a comment. Only its author may do so.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        comment_id: CommentId,
        content: &str,
    ) -> AppResult<CommentDetails> {
        let (mut comment, author) = self.owned_comment(ctx, comment_id).await?;
        non_blank(content, "content", "Content is required.")?;

        comment.content = content.to_string();
        comment.updated_at = ctx.request_time;
        let comment = self.stores.comments.update(&comment).await?;

        info!(comment_id = %comment.id, "Comment updated");
        Ok(view(comment, &author))
    }

    /// Delete a comment. Only its author may do so.
    pub async fn delete(&self, ctx: &RequestContext, comment_id: CommentId) -> AppResult<()> {
        let (comment, _) = self.owned_comment(ctx, comment_id).await?;
        if !self.stores.comments.delete(comment.id).await? {
            return Err(comment_not_found(comment.id));
        }
        info!(comment_id = %comment.id, "Comment deleted");
        Ok(())
    }

    /// Clear every comment on a post. Only the post's author may do so.
    pub async fn delete_all_for_post(&self, ctx: &RequestContext, post_id: PostId) -> AppResult<u64> {
        self.policy.ensure_authenticated(&ctx.session)?;
        check_post_id(post_id)?;

        let post = self
            .stores
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))?;
        let owner = self
            .stores
            .users
            .find_by_id(post.author_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))?;
        self.policy.ensure_can_mutate(&ctx.session, &owner.email)?;

        let removed = self.stores.comments.delete_all_by_post(post_id).await?;
        info!(post_id = %post_id, removed, "Comments cleared");
        Ok(removed)
    }

    /// Load a comment and its author, requiring the acting user to be that author.
    async fn owned_comment(
        &self,
        ctx: &RequestContext,
        comment_id: CommentId,
    ) -> AppResult<(Comment, User)> {
        self.policy.ensure_authenticated(&ctx.session)?;
        if !comment_id.is_valid() {
            return Err(field_error("commentId", "Invalid comment ID."));
        }

        let comment = self
            .stores
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| comment_not_found(comment_id))?;
        let author = self
            .stores
            .users
            .find_by_id(comment.author_id)
            .await?
            .ok_or_else(|| comment_not_found(comment_id))?;
        self.policy.ensure_can_mutate(&ctx.session, &author.email)?;
        Ok((comment, author))
    }
}

fn view(comment: Comment, author: &User) -> CommentDetails {
    comment_details(comment, author.summary())
}

fn comment_not_found(comment_id: CommentId) -> AppError {
    AppError::not_found(format!("Comment not found: {comment_id}"))
}

#[cfg(test)]
mod tests {
    use scribe_core::error::ErrorKind;

    use super::*;
    use crate::PostInput;
    use crate::testing::Fixture;

    async fn post_by(fx: &Fixture, ctx: &RequestContext) -> PostId {
        let input = PostInput {
            title: "Post".into(),
            content: "Body".into(),
            categories: vec![],
        };
        fx.posts.create(ctx, input).await.unwrap().id
    }

    #[tokio::test]
    async fn test_comments_appear_on_post_oldest_first() {
        let fx = Fixture::new().await;
        let john = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let jane = RequestContext::for_user(fx.register("jane@x.com", "USER").await);
        let post_id = post_by(&fx, &john).await;

        let first = fx.comments.create(&jane, post_id, "first").await.unwrap();
        let second = fx.comments.create(&john, post_id, "second").await.unwrap();
        assert_eq!(first.author.email, "jane@x.com");

        let post = fx.posts.get(post_id).await.unwrap();
        let ids: Vec<CommentId> = post.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_comment_on_missing_post() {
        let fx = Fixture::new().await;
        let john = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let err = fx
            .comments
            .create(&john, PostId::new(7), "hello")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_only_author_edits_or_deletes_comment() {
        let fx = Fixture::new().await;
        let john = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let jane = RequestContext::for_user(fx.register("jane@x.com", "USER").await);
        let post_id = post_by(&fx, &john).await;
        let comment = fx.comments.create(&jane, post_id, "hi").await.unwrap();

        let err = fx.comments.update(&john, comment.id, "edited").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        let err = fx.comments.delete(&john, comment.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let edited = fx.comments.update(&jane, comment.id, "edited").await.unwrap();
        assert_eq!(edited.content, "edited");
        assert!(edited.updated_at >= comment.updated_at);

        fx.comments.delete(&jane, comment.id).await.unwrap();
        assert!(fx.posts.get(post_id).await.unwrap().comments.is_empty());

        let err = fx
            .comments
            .delete(&jane, CommentId::new(-1))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid comment ID.");
    }

    #[tokio::test]
    async fn test_only_post_owner_clears_comments() {
        let fx = Fixture::new().await;
        let john = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let jane = RequestContext::for_user(fx.register("jane@x.com", "USER").await);
        let post_id = post_by(&fx, &john).await;
        fx.comments.create(&jane, post_id, "a").await.unwrap();
        fx.comments.create(&jane, post_id, "b").await.unwrap();

        let err = fx
            .comments
            .delete_all_for_post(&jane, post_id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(fx.posts.get(post_id).await.unwrap().comments.len(), 2);

        assert_eq!(fx.comments.delete_all_for_post(&john, post_id).await.unwrap(), 2);
        assert!(fx.posts.get(post_id).await.unwrap().comments.is_empty());
    }
}
