//! Integration tests for post authoring and listing.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;

fn titles(data: &Value) -> Vec<&str> {
    data.as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_post() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;

    let response = app
        .request(
            "POST",
            "/post",
            Some(json!({
                "title": "Hello",
                "content": "First post",
                "categories": ["rust", " web ", "rust"],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["title"], "Hello");
    assert_eq!(response.data()["author"]["email"], "john@x.com");
    assert_eq!(response.data()["categories"], json!(["rust", "web"]));
    assert_eq!(response.data()["comments"], json!([]));
}

#[tokio::test]
async fn test_create_post_requires_title() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;

    let response = app
        .request(
            "POST",
            "/post",
            Some(json!({ "title": " ", "content": "body" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.data()["title"], "Title is required.");
}

#[tokio::test]
async fn test_create_post_requires_authentication() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/post",
            Some(json!({ "title": "Hello", "content": "body" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_all_is_public_and_newest_first() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;
    app.create_post(&token, "first", &[]).await;
    app.create_post(&token, "second", &[]).await;

    let response = app.request("GET", "/post/all", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(titles(response.data()), vec!["second", "first"]);
}

#[tokio::test]
async fn test_list_own_posts() {
    let app = TestApp::new().await;
    let john = app.register_user("john@x.com").await;
    let jane = app.register_user("jane@x.com").await;
    app.create_post(&john, "by john", &[]).await;
    app.create_post(&jane, "by jane", &[]).await;

    let response = app.request("GET", "/post", None, Some(&jane)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(titles(response.data()), vec!["by jane"]);
}

#[tokio::test]
async fn test_list_by_categories_matches_any_label_once() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;
    app.create_post(&token, "both", &["rust", "web"]).await;
    app.create_post(&token, "web only", &["web"]).await;
    app.create_post(&token, "other", &["cooking"]).await;

    let response = app
        .request(
            "GET",
            "/post/category?categories=rust,web",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(titles(response.data()), vec!["web only", "both"]);
}

#[tokio::test]
async fn test_update_post_by_owner() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;
    let id = app.create_post(&token, "draft", &[]).await;

    let response = app
        .request(
            "PUT",
            &format!("/post?pid={id}"),
            Some(json!({ "title": "final", "content": "done", "categories": ["news"] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["title"], "final");
    assert_eq!(response.data()["categories"], json!(["news"]));
}

#[tokio::test]
async fn test_update_post_by_stranger_is_denied() {
    let app = TestApp::new().await;
    let john = app.register_user("john@x.com").await;
    let mallory = app.register_user("mallory@x.com").await;
    let id = app.create_post(&john, "mine", &[]).await;

    let response = app
        .request(
            "PUT",
            &format!("/post?pid={id}"),
            Some(json!({ "title": "defaced", "content": "x" })),
            Some(&mallory),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/post/all", None, None).await;
    assert_eq!(titles(response.data()), vec!["mine"]);
}

#[tokio::test]
async fn test_invalid_and_unknown_post_ids() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;

    let response = app
        .request("DELETE", "/post?pid=0", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), Some("Invalid post ID."));

    let response = app
        .request("DELETE", "/post?pid=999", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_post_disappears_from_listings() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;
    let id = app.create_post(&token, "gone", &["rust"]).await;
    app.create_post(&token, "kept", &["rust"]).await;

    let response = app
        .request("DELETE", &format!("/post?pid={id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/post/all", None, None).await;
    assert_eq!(titles(response.data()), vec!["kept"]);

    let response = app
        .request("GET", "/post/category?categories=rust", None, Some(&token))
        .await;
    assert_eq!(titles(response.data()), vec!["kept"]);
}

#[tokio::test]
async fn test_delete_all_own_leaves_other_authors() {
    let app = TestApp::new().await;
    let john = app.register_user("john@x.com").await;
    let jane = app.register_user("jane@x.com").await;
    app.create_post(&john, "john 1", &[]).await;
    app.create_post(&john, "john 2", &[]).await;
    app.create_post(&jane, "jane 1", &[]).await;

    let response = app.request("DELETE", "/post/all", None, Some(&john)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["deleted"], 2);

    let response = app.request("GET", "/post/all", None, None).await;
    assert_eq!(titles(response.data()), vec!["jane 1"]);
}
