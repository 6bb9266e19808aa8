//! Shared fixtures for service tests.

use std::sync::Arc;

use chrono::NaiveDate;

use scribe_auth::{
    AuthorizationPolicy, CredentialVerifier, PasswordHasher, PasswordValidator, TokenService,
};
use scribe_core::config::AuthConfig;
use scribe_database::{MemoryStore, Stores};
use scribe_entity::user::User;

use crate::{CommentService, PostService, RoleService, UserInput, UserService};

pub(crate) struct Fixture {
    pub tokens: Arc<TokenService>,
    pub users: UserService,
    pub roles: RoleService,
    pub posts: PostService,
    pub comments: CommentService,
}

impl Fixture {
    pub async fn new() -> Self {
        let config = AuthConfig {
            jwt_secret: "service-test-secret-0123456789abcdef".into(),
            ..AuthConfig::default()
        };
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let hasher = Arc::new(PasswordHasher::new());
        let tokens = Arc::new(TokenService::new(&config));
        let policy = AuthorizationPolicy::new();
        let verifier = Arc::new(CredentialVerifier::new(
            stores.users.clone(),
            PasswordHasher::new(),
        ));

        let roles = RoleService::new(stores.roles.clone(), policy);
        roles.seed_defaults().await.unwrap();

        Self {
            users: UserService::new(
                stores.users.clone(),
                stores.roles.clone(),
                tokens.clone(),
                verifier,
                hasher,
                Arc::new(PasswordValidator::new(&config)),
                policy,
                &config,
            ),
            roles,
            posts: PostService::new(stores.clone(), policy),
            comments: CommentService::new(stores, policy),
            tokens,
        }
    }

    /// Register `email` with the given role and return the stored user.
    pub async fn register(&self, email: &str, role: &str) -> User {
        let mut input = john();
        input.email = email.to_string();
        self.users.register(input, role).await.unwrap().user
    }
}

pub(crate) fn john() -> UserInput {
    UserInput {
        email: "john@x.com".into(),
        password: "user_pass".into(),
        gender: None,
        date_of_birth: NaiveDate::from_ymd_opt(1991, 2, 14).unwrap(),
        firstname: "John".into(),
        lastname: "Doe".into(),
    }
}
