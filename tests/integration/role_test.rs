//! Integration tests for role administration.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_admin_lists_default_roles() {
    let app = TestApp::new().await;
    let admin = app.register_admin("root@x.com").await;

    let response = app.request("GET", "/roles/all", None, Some(&admin)).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["roleName"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"ADMIN"));
    assert!(names.contains(&"USER"));
}

#[tokio::test]
async fn test_plain_user_cannot_manage_roles() {
    let app = TestApp::new().await;
    let user = app.register_user("john@x.com").await;

    let response = app.request("GET", "/roles/all", None, Some(&user)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/roles",
            Some(json!({ "roleName": "EDITOR", "roleDescription": "Edits" })),
            Some(&user),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_rename_role() {
    let app = TestApp::new().await;
    let admin = app.register_admin("root@x.com").await;

    let response = app
        .request(
            "POST",
            "/roles",
            Some(json!({ "roleName": "editor", "roleDescription": "Edits posts" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["roleName"], "EDITOR");

    let response = app
        .request(
            "PUT",
            "/roles?roleName=EDITOR",
            Some(json!({ "roleName": "REVIEWER", "roleDescription": "Reviews posts" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["roleName"], "REVIEWER");
    assert_eq!(response.data()["roleDescription"], "Reviews posts");
}

#[tokio::test]
async fn test_duplicate_role_conflicts() {
    let app = TestApp::new().await;
    let admin = app.register_admin("root@x.com").await;

    let response = app
        .request(
            "POST",
            "/roles",
            Some(json!({ "roleName": "USER", "roleDescription": "again" })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_rename_missing_role() {
    let app = TestApp::new().await;
    let admin = app.register_admin("root@x.com").await;

    let response = app
        .request(
            "PUT",
            "/roles?roleName=GHOST",
            Some(json!({ "roleName": "SPIRIT" })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
