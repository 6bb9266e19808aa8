//! Integration tests for registration, login and profile management.

mod helpers;

use axum::http::StatusCode;
use chrono::{Days, Utc};
use serde_json::json;

use helpers::{TestApp, registration, test_config};

#[tokio::test]
async fn test_register_returns_profile_and_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users/u-register",
            Some(registration("john@x.com", "1991-02-14")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["firstname"], "John");
    assert_eq!(response.data()["email"], "john@x.com");
    assert_eq!(response.data()["dateOfBirth"], "1991-02-14");
    assert!(response.data()["jwtToken"].is_string());
    assert!(response.data().get("password").is_none());

    let token = response.data()["jwtToken"].as_str().unwrap();
    assert_eq!(app.state.tokens.extract_subject(token).unwrap(), "john@x.com");
}

#[tokio::test]
async fn test_underage_registration_is_rejected_and_not_persisted() {
    let app = TestApp::new().await;
    let dob = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(365 * 10))
        .unwrap();

    let response = app
        .request(
            "POST",
            "/users/u-register",
            Some(registration("kid@x.com", &dob.to_string())),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        Some("User must be at least 18 years old to register.")
    );
    assert!(app.state.user_service.find_by_email("kid@x.com").await.is_err());
}

#[tokio::test]
async fn test_blank_fields_report_field_errors() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users/u-register",
            Some(json!({
                "email": "",
                "password": " ",
                "firstname": "John",
                "lastname": "Doe",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    let details = response.data();
    assert_eq!(details["email"], "Email is required.");
    assert_eq!(details["password"], "Password is required.");
    assert_eq!(details["dateOfBirth"], "Date of birth is required.");
    assert!(details.get("firstname").is_none());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.register_user("john@x.com").await;

    let response = app
        .request(
            "POST",
            "/users/u-register",
            Some(registration("JOHN@x.com", "1990-01-01")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.message(),
        Some("There is a user associated with this email.")
    );
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let app = TestApp::new().await;
    let mut body = registration("john@x.com", "1991-02-14");
    body["password"] = json!("short");

    let response = app
        .request("POST", "/users/u-register", Some(body), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        Some("Password must be at least 8 characters long.")
    );
}

#[tokio::test]
async fn test_admin_registration_can_be_disabled() {
    let mut config = test_config();
    config.auth.admin_registration_enabled = false;
    let app = TestApp::with_config(config).await;

    let response = app
        .request(
            "POST",
            "/users/a-register",
            Some(registration("root@x.com", "1980-05-05")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.register_user("john@x.com").await;

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "username": "john@x.com", "password": "user_pass" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.data()["token"].as_str().unwrap();
    assert!(app.state.tokens.validate(token, "john@x.com"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register_user("john@x.com").await;

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "username": "john@x.com", "password": "wrong_pass" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), Some("Bad credentials."));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(json!({ "username": "nobody@x.com", "password": "user_pass" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;

    let mut body = registration("john@x.com", "1991-02-14");
    body["firstname"] = json!("Johnny");

    let response = app
        .request("PUT", "/users?un=john@x.com", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["firstname"], "Johnny");
    assert!(response.data()["age"].as_i64().unwrap() >= 18);
    assert_eq!(response.data()["roles"], json!(["USER"]));
}

#[tokio::test]
async fn test_cannot_update_someone_else() {
    let app = TestApp::new().await;
    app.register_user("john@x.com").await;
    let mallory = app.register_user("mallory@x.com").await;

    let mut body = registration("john@x.com", "1991-02-14");
    body["firstname"] = json!("Hacked");

    let response = app
        .request("PUT", "/users?un=john@x.com", Some(body), Some(&mallory))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let john = app.state.user_service.find_by_email("john@x.com").await.unwrap();
    assert_eq!(john.firstname, "John");
}

#[tokio::test]
async fn test_delete_account_revokes_access() {
    let app = TestApp::new().await;
    let token = app.register_user("john@x.com").await;

    let response = app
        .request("DELETE", "/users?un=john@x.com", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/post", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_or_forged_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/post", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/post", None, Some("not.a.token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["store"], "memory");
}
