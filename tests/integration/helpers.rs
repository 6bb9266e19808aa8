//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use scribe_api::{AppState, build_app};
use scribe_core::config::{AppConfig, StoreProvider};
use scribe_database::{MemoryStore, Stores};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct service access
    pub state: AppState,
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of the envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `message` member of the envelope.
    pub fn message(&self) -> Option<&str> {
        self.body["message"].as_str()
    }
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let state = AppState::new(config, stores, None);
        state
            .role_service
            .seed_defaults()
            .await
            .expect("Failed to seed roles");

        Self {
            router: build_app(state.clone()),
            state,
        }
    }

    /// Send a request with an optional JSON body and bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Register through `/users/u-register` and return the issued token
    pub async fn register_user(&self, email: &str) -> String {
        self.register("/users/u-register", email).await
    }

    /// Register through `/users/a-register` and return the issued token
    pub async fn register_admin(&self, email: &str) -> String {
        self.register("/users/a-register", email).await
    }

    async fn register(&self, path: &str, email: &str) -> String {
        let response = self
            .request("POST", path, Some(registration(email, "1991-02-14")), None)
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.data()["jwtToken"]
            .as_str()
            .expect("registration returns a token")
            .to_string()
    }

    /// Create a post as the holder of `token` and return its id
    pub async fn create_post(&self, token: &str, title: &str, categories: &[&str]) -> i64 {
        let response = self
            .request(
                "POST",
                "/post",
                Some(json!({
                    "title": title,
                    "content": format!("{title} body"),
                    "categories": categories,
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.data()["id"].as_i64().expect("post id")
    }

    /// Comment on `post_id` as the holder of `token` and return the comment id
    pub async fn create_comment(&self, token: &str, post_id: i64, content: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/comments",
                Some(json!({ "content": content, "postId": post_id })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.data()["id"].as_i64().expect("comment id")
    }
}

/// Configuration for tests: memory store, fixed secret
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.provider = StoreProvider::Memory;
    config.auth.jwt_secret = "integration-test-secret-0123456789abcdef".to_string();
    config
}

/// A complete registration body for `email`
pub fn registration(email: &str, date_of_birth: &str) -> Value {
    json!({
        "email": email,
        "password": "user_pass",
        "gender": "MALE",
        "dateOfBirth": date_of_birth,
        "firstname": "John",
        "lastname": "Doe",
    })
}
