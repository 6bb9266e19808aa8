//! Integration tests for comments.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_comment_appears_on_post() {
    let app = TestApp::new().await;
    let john = app.register_user("john@x.com").await;
    let jane = app.register_user("jane@x.com").await;
    let post_id = app.create_post(&john, "Hello", &[]).await;

    let response = app
        .request(
            "POST",
            "/comments",
            Some(json!({ "content": "Nice post", "postId": post_id })),
            Some(&jane),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["content"], "Nice post");
    assert_eq!(response.data()["author"]["email"], "jane@x.com");

    let response = app.request("GET", "/post/all", None, None).await;
    let comments = &response.data()[0]["comments"];
    assert_eq!(comments.as_array().unwrap().len(), 1);
    assert_eq!(comments[0]["author"]["email"], "jane@x.com");
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;

    let response = app
        .request(
            "POST",
            "/comments",
            Some(json!({ "content": "hello?", "postId": 42 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comment_requires_content_and_post() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;

    let response = app
        .request("POST", "/comments", Some(json!({ "content": "" })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.data()["content"], "Content is required.");
    assert_eq!(response.data()["postId"], "Post id is required.");
}

#[tokio::test]
async fn test_update_comment_by_author_only() {
    let app = TestApp::new().await;
    let john = app.register_user("john@x.com").await;
    let jane = app.register_user("jane@x.com").await;
    let post_id = app.create_post(&john, "Hello", &[]).await;
    let comment_id = app.create_comment(&jane, post_id, "first").await;

    let response = app
        .request(
            "PUT",
            "/comments",
            Some(json!({ "content": "edited", "commentId": comment_id })),
            Some(&john),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "PUT",
            "/comments",
            Some(json!({ "content": "edited", "commentId": comment_id })),
            Some(&jane),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["content"], "edited");
}

#[tokio::test]
async fn test_delete_comment() {
    let app = TestApp::new().await;
    let john = app.register_user("john@x.com").await;
    let post_id = app.create_post(&john, "Hello", &[]).await;
    let comment_id = app.create_comment(&john, post_id, "oops").await;

    let response = app
        .request(
            "DELETE",
            &format!("/comments?cid={comment_id}"),
            None,
            Some(&john),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/comments?cid={comment_id}"),
            None,
            Some(&john),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_post_owner_clears_comments() {
    let app = TestApp::new().await;
    let john = app.register_user("john@x.com").await;
    let jane = app.register_user("jane@x.com").await;
    let post_id = app.create_post(&john, "Hello", &[]).await;
    app.create_comment(&jane, post_id, "one").await;
    app.create_comment(&jane, post_id, "two").await;

    let path = format!("/comments/all?pid={post_id}");
    let response = app.request("DELETE", &path, None, Some(&jane)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("DELETE", &path, None, Some(&john)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["deleted"], 2);
}

#[tokio::test]
async fn test_deleting_post_removes_its_comments() {
    let app = TestApp::new().await;
    let john = app.register_user("john@x.com").await;
    let post_id = app.create_post(&john, "Hello", &[]).await;
    let comment_id = app.create_comment(&john, post_id, "bye").await;

    app.request("DELETE", &format!("/post?pid={post_id}"), None, Some(&john))
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/comments?cid={comment_id}"),
            None,
            Some(&john),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
