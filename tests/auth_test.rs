//! Integration tests for the authentication flow.

mod helpers;

use http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_login_success_sets_cookie() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form("/auth/login", "login=admin&password=admin123", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success"), Some(&Value::Bool(true)));
    assert_eq!(
        response.body["user"]["login"].as_str(),
        Some("admin")
    );
    assert_eq!(response.body["user"]["role"].as_str(), Some("admin"));
    assert!(response.set_cookie.is_some());
}

#[tokio::test]
async fn test_login_wrong_password_is_200_with_failure_body() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form("/auth/login", "login=admin&password=nope", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success"), Some(&Value::Bool(false)));
    assert_eq!(
        response.body["message"].as_str(),
        Some("Invalid password")
    );
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form("/auth/login", "login=nobody&password=whatever", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"].as_str(), Some("User not found"));
}

#[tokio::test]
async fn test_register_then_login() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form(
            "/auth/register",
            "login=alice&password=secret&fullName=Alice&email=alice%40example.com",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success"), Some(&Value::Bool(true)));

    let cookie = app.login("alice", "secret").await;

    let check = app.request("GET", "/auth/check", None, Some(&cookie)).await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(check.body["authenticated"], Value::Bool(true));
    assert_eq!(check.body["user"]["login"].as_str(), Some("alice"));
    assert_eq!(check.body["user"]["role"].as_str(), Some("user"));
}

#[tokio::test]
async fn test_register_duplicate_login_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form(
            "/auth/register",
            "login=admin&password=other&fullName=Fake&email=fake%40example.com",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success"), Some(&Value::Bool(false)));
    assert_eq!(
        response.body["message"].as_str(),
        Some("A user with this login already exists")
    );
}

#[tokio::test]
async fn test_register_missing_fields_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form("/auth/register", "login=&password=", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"].as_str(),
        Some("Login and password are required")
    );
}

#[tokio::test]
async fn test_check_without_session_is_anonymous() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/auth/check", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["authenticated"], Value::Bool(false));
    assert!(response.body.get("user").is_none());
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login("user", "user123").await;

    let logout = app.request("GET", "/auth/logout", None, Some(&cookie)).await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body.get("success"), Some(&Value::Bool(true)));

    let check = app.request("GET", "/auth/check", None, Some(&cookie)).await;
    assert_eq!(check.body["authenticated"], Value::Bool(false));
}

#[tokio::test]
async fn test_logout_without_session() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success"), Some(&Value::Bool(false)));
    assert_eq!(response.body["message"].as_str(), Some("No active session"));
}

#[tokio::test]
async fn test_check_reflects_out_of_band_deletion() {
    let app = helpers::TestApp::new().await;
    let cookie = app.login("user", "user123").await;

    let check = app.request("GET", "/auth/check", None, Some(&cookie)).await;
    let id = check.body["user"]["id"].as_i64().expect("user id") as i32;

    app.users.remove(id);

    let check = app.request("GET", "/auth/check", None, Some(&cookie)).await;
    assert_eq!(check.body["authenticated"], Value::Bool(false));
}

#[tokio::test]
async fn test_unknown_auth_path_is_404() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/auth/bogus", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_on_auth_route_is_404() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/auth/login", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("POST", "/auth/check", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
