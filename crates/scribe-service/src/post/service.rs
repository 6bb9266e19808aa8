//! Post use cases.

use tracing::info;

use scribe_auth::AuthorizationPolicy;
use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_core::types::PostId;
use scribe_database::Stores;
use scribe_entity::post::{NewPost, Post, PostDetails, normalize_categories};

use super::views::ViewAssembler;
use crate::context::RequestContext;
use crate::validate::{field_error, non_blank};

/// Title, body, and labels of a post being written.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub categories: Vec<String>,
}

impl PostInput {
    fn check(&self) -> AppResult<()> {
        non_blank(&self.title, "title", "Title is required.")?;
        non_blank(&self.content, "content", "Content is required.")
    }
}

/// Handles authoring, reading, and deleting posts.
#[derive(Debug, Clone)]
pub struct PostService {
    stores: Stores,
    views: ViewAssembler,
    policy: AuthorizationPolicy,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(stores: Stores, policy: AuthorizationPolicy) -> Self {
        Self {
            views: ViewAssembler::new(stores.clone()),
            stores,
            policy,
        }
    }

    /// Publish a post owned by the acting user.
    pub async fn create(&self, ctx: &RequestContext, input: PostInput) -> AppResult<PostDetails> {
        let author = self.policy.ensure_authenticated(&ctx.session)?;
        input.check()?;

        let post = self
            .stores
            .posts
            .create(&NewPost {
                title: input.title,
                content: input.content,
                author_id: author.id,
                categories: normalize_categories(input.categories),
                created_at: ctx.request_time,
            })
            .await?;

        info!(post_id = %post.id, author = %author.email, "Post created");
        self.details(post).await
    }

    /// Rewrite a post. Only its author may do so.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        post_id: PostId,
        input: PostInput,
    ) -> AppResult<PostDetails> {
        let mut post = self.owned_post(ctx, post_id).await?;
        input.check()?;

        post.title = input.title;
        post.content = input.content;
        post.categories = normalize_categories(input.categories);
        post.updated_at = ctx.request_time;

        let post = self.stores.posts.update(&post).await?;
        info!(post_id = %post.id, "Post updated");
        self.details(post).await
    }

    pub async fn get(&self, post_id: PostId) -> AppResult<PostDetails> {
        let post = self.find(post_id).await?;
        self.details(post).await
    }

    /// Every post, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<PostDetails>> {
        let posts = self.stores.posts.find_all().await?;
        self.views.posts(posts).await
    }

    /// Posts of the acting user, newest first.
    pub async fn list_own(&self, ctx: &RequestContext) -> AppResult<Vec<PostDetails>> {
        let user = self.policy.ensure_authenticated(&ctx.session)?;
        let posts = self.stores.posts.find_by_author_email(&user.email).await?;
        self.views.posts(posts).await
    }

    /// Posts carrying any of `categories`, each once, newest first.
    pub async fn list_by_categories(&self, categories: &[String]) -> AppResult<Vec<PostDetails>> {
        let wanted = normalize_categories(categories);
        if wanted.is_empty() {
            return Ok(Vec::new());
        }
        let posts = self.stores.posts.find_by_categories(&wanted).await?;
        self.views.posts(posts).await
    }

    /// Delete a post and its comments. Only its author may do so.
    pub async fn delete(&self, ctx: &RequestContext, post_id: PostId) -> AppResult<()> {
        let post = self.owned_post(ctx, post_id).await?;
        if !self.stores.posts.delete(post.id).await? {
            return Err(post_not_found(post.id));
        }
        info!(post_id = %post.id, "Post deleted");
        Ok(())
    }

    /// Delete every post of the acting user. Returns how many were removed.
    pub async fn delete_all_own(&self, ctx: &RequestContext) -> AppResult<u64> {
        let user = self.policy.ensure_authenticated(&ctx.session)?;
        let removed = self
            .stores
            .posts
            .delete_all_by_author_email(&user.email)
            .await?;
        info!(author = %user.email, removed, "Posts deleted");
        Ok(removed)
    }

    async fn find(&self, post_id: PostId) -> AppResult<Post> {
        check_post_id(post_id)?;
        self.stores
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))
    }

    /// Load a post and require the acting user to be its author.
    async fn owned_post(&self, ctx: &RequestContext, post_id: PostId) -> AppResult<Post> {
        self.policy.ensure_authenticated(&ctx.session)?;
        let post = self.find(post_id).await?;
        let owner = self
            .stores
            .users
            .find_by_id(post.author_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))?;
        self.policy.ensure_can_mutate(&ctx.session, &owner.email)?;
        Ok(post)
    }

    async fn details(&self, post: Post) -> AppResult<PostDetails> {
        let id = post.id;
        self.views
            .post(post)
            .await?
            .ok_or_else(|| post_not_found(id))
    }
}

pub(crate) fn check_post_id(post_id: PostId) -> AppResult<()> {
    if post_id.is_valid() {
        Ok(())
    } else {
        Err(field_error("postId", "Invalid post ID."))
    }
}

pub(crate) fn post_not_found(post_id: PostId) -> AppError {
    AppError::not_found(format!("Post not found: {post_id}"))
}

#[cfg(test)]
mod tests {
    use scribe_core::error::ErrorKind;

    use super::*;
    use crate::testing::Fixture;

    fn input(title: &str, categories: &[&str]) -> PostInput {
        PostInput {
            title: title.to_string(),
            content: format!("{title} body"),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_requires_authentication() {
        let fx = Fixture::new().await;
        let err = fx
            .posts
            .create(&RequestContext::anonymous(), input("t", &[]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert!(fx.posts.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let mut blank = input("t", &[]);
        blank.content = "   ".into();
        let err = fx.posts.create(&ctx, blank).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Content is required.");
    }

    #[tokio::test]
    async fn test_create_and_read_back() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::for_user(fx.register("john@x.com", "USER").await);

        let created = fx
            .posts
            .create(&ctx, input("Hello", &["rust", "web", "rust"]))
            .await
            .unwrap();
        assert_eq!(created.author.email, "john@x.com");
        assert_eq!(created.categories, vec!["rust", "web"]);
        assert!(created.created_at <= chrono::Utc::now());

        let fetched = fx.posts.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_invalid_and_missing_ids() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::for_user(fx.register("john@x.com", "USER").await);

        let err = fx.posts.get(PostId::new(0)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid post ID.");

        let err = fx
            .posts
            .update(&ctx, PostId::new(99), input("x", &[]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_non_owner_cannot_update_or_delete() {
        let fx = Fixture::new().await;
        let john = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let jane = RequestContext::for_user(fx.register("jane@x.com", "USER").await);

        let post = fx.posts.create(&john, input("mine", &[])).await.unwrap();

        let err = fx
            .posts
            .update(&jane, post.id, input("stolen", &[]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        let err = fx.posts.delete(&jane, post.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        assert_eq!(fx.posts.get(post.id).await.unwrap().title, "mine");
    }

    #[tokio::test]
    async fn test_deleted_post_leaves_every_listing() {
        let fx = Fixture::new().await;
        let john = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let post = fx.posts.create(&john, input("gone", &["rust"])).await.unwrap();

        fx.posts.delete(&john, post.id).await.unwrap();

        assert!(fx.posts.list_all().await.unwrap().is_empty());
        assert!(
            fx.posts
                .list_by_categories(&["rust".to_string()])
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            fx.posts.get(post.id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_delete_all_own_spares_other_authors() {
        let fx = Fixture::new().await;
        let john = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let jane = RequestContext::for_user(fx.register("jane@x.com", "USER").await);
        fx.posts.create(&john, input("j1", &[])).await.unwrap();
        fx.posts.create(&john, input("j2", &[])).await.unwrap();
        fx.posts.create(&jane, input("x1", &[])).await.unwrap();

        assert_eq!(fx.posts.delete_all_own(&john).await.unwrap(), 2);
        assert!(fx.posts.list_own(&john).await.unwrap().is_empty());

        let remaining = fx.posts.list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].author.email, "jane@x.com");
    }

    #[tokio::test]
    async fn test_category_listing_matches_any_label() {
        let fx = Fixture::new().await;
        let john = RequestContext::for_user(fx.register("john@x.com", "USER").await);
        let both = fx.posts.create(&john, input("both", &["rust", "web"])).await.unwrap();
        fx.posts.create(&john, input("go", &["go"])).await.unwrap();

        let found = fx
            .posts
            .list_by_categories(&["web".to_string(), "rust".to_string()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, both.id);
    }
}
