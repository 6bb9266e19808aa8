//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use scribe_auth::{
    AuthorizationPolicy, CredentialVerifier, PasswordHasher, PasswordValidator, TokenService,
};
use scribe_core::config::AppConfig;
use scribe_database::{DatabasePool, Stores, UserStore};
use scribe_service::{CommentService, PostService, RoleService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool, absent when running on the memory store
    pub db_pool: Option<DatabasePool>,
    /// User store, used to resolve token subjects
    pub users: Arc<dyn UserStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Token issuance and verification
    pub tokens: Arc<TokenService>,

    // ── Services ─────────────────────────────────────────────
    pub user_service: Arc<UserService>,
    pub role_service: Arc<RoleService>,
    pub post_service: Arc<PostService>,
    pub comment_service: Arc<CommentService>,
}

impl AppState {
    /// Wire the auth components and services over `stores`.
    pub fn new(config: AppConfig, stores: Stores, db_pool: Option<DatabasePool>) -> Self {
        let policy = AuthorizationPolicy::new();
        let hasher = Arc::new(PasswordHasher::new());
        let tokens = Arc::new(TokenService::new(&config.auth));
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let verifier = Arc::new(CredentialVerifier::new(
            stores.users.clone(),
            PasswordHasher::new(),
        ));

        let user_service = Arc::new(UserService::new(
            stores.users.clone(),
            stores.roles.clone(),
            Arc::clone(&tokens),
            verifier,
            hasher,
            validator,
            policy,
            &config.auth,
        ));
        let role_service = Arc::new(RoleService::new(stores.roles.clone(), policy));
        let post_service = Arc::new(PostService::new(stores.clone(), policy));
        let comment_service = Arc::new(CommentService::new(stores.clone(), policy));

        Self {
            config: Arc::new(config),
            db_pool,
            users: stores.users,
            tokens,
            user_service,
            role_service,
            post_service,
            comment_service,
        }
    }
}
