//! Store traits and their PostgreSQL implementations.
//!
//! Services depend only on the traits so the same use cases run against
//! PostgreSQL in production and against [`crate::MemoryStore`] in tests or
//! when `database.provider = "memory"`.

pub mod comment;
pub mod post;
pub mod role;
pub mod user;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use scribe_core::result::AppResult;
use scribe_core::types::{CommentId, PostId, RoleId, UserId};
use scribe_entity::comment::{Comment, NewComment};
use scribe_entity::post::{NewPost, Post};
use scribe_entity::role::{NewRole, Role};
use scribe_entity::user::{CreateUser, User};

use crate::memory::MemoryStore;

pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use role::PgRoleRepository;
pub use user::PgUserRepository;

/// Persistence of identities and their role grants.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find several users at once. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>>;

    /// Check whether an email is already registered (case-insensitive).
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert a user together with its role grants.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Rewrite the profile columns of an existing user.
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Delete a user with their posts and comments. Returns whether a row was removed.
    async fn delete_by_email(&self, email: &str) -> AppResult<bool>;
}

/// Persistence of roles.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// All roles ordered by name.
    async fn find_all(&self) -> AppResult<Vec<Role>>;

    async fn create(&self, data: &NewRole) -> AppResult<Role>;

    async fn update(&self, id: RoleId, data: &NewRole) -> AppResult<Role>;
}

/// Persistence of posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> AppResult<Option<Post>>;

    /// All posts, newest first.
    async fn find_all(&self) -> AppResult<Vec<Post>>;

    /// Posts of one author, newest first.
    async fn find_by_author_email(&self, email: &str) -> AppResult<Vec<Post>>;

    /// Posts carrying at least one of `categories`, each once, newest first.
    async fn find_by_categories(&self, categories: &[String]) -> AppResult<Vec<Post>>;

    async fn create(&self, data: &NewPost) -> AppResult<Post>;

    /// Rewrite title, content, categories and modification time.
    async fn update(&self, post: &Post) -> AppResult<Post>;

    /// Delete a post and its comments.
    async fn delete(&self, id: PostId) -> AppResult<bool>;

    /// Delete every post of one author. Returns the number of posts removed.
    async fn delete_all_by_author_email(&self, email: &str) -> AppResult<u64>;
}

/// Persistence of comments.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> AppResult<Option<Comment>>;

    /// Comments of the given posts, oldest first.
    async fn find_by_post_ids(&self, post_ids: &[PostId]) -> AppResult<Vec<Comment>>;

    async fn create(&self, data: &NewComment) -> AppResult<Comment>;

    /// Rewrite content and modification time.
    async fn update(&self, comment: &Comment) -> AppResult<Comment>;

    async fn delete(&self, id: CommentId) -> AppResult<bool>;

    /// Delete every comment of one post. Returns the number removed.
    async fn delete_all_by_post(&self, post_id: PostId) -> AppResult<u64>;
}

macro_rules! opaque_debug {
    ($($store:ident),*) => {
        $(
            impl std::fmt::Debug for dyn $store {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(stringify!($store))
                }
            }
        )*
    };
}

opaque_debug!(UserStore, RoleStore, PostStore, CommentStore);

/// One handle per store trait, shared by all services.
#[derive(Debug, Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub roles: Arc<dyn RoleStore>,
    pub posts: Arc<dyn PostStore>,
    pub comments: Arc<dyn CommentStore>,
}

impl Stores {
    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            roles: Arc::new(PgRoleRepository::new(pool.clone())),
            posts: Arc::new(PgPostRepository::new(pool.clone())),
            comments: Arc::new(PgCommentRepository::new(pool)),
        }
    }

    /// Stores backed by a single in-process [`MemoryStore`].
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            roles: store.clone(),
            posts: store.clone(),
            comments: store,
        }
    }
}
