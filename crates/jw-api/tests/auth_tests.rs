use axum::http::StatusCode;
use jw_db::models::Role;
use serde_json::json;

use crate::common::{TestClient, TestStateBuilder, db};

#[tokio::test]
async fn test_login_rejects_malformed_email() {
    let client = TestClient::new(TestStateBuilder::new().build_lazy());

    let response = client
        .post_json(
            "/api/login",
            &json!({ "email": "not-an-email", "password": "sakura123" }),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Email Format is Invalid.");
}

#[tokio::test]
async fn test_login_rejects_short_password() {
    let client = TestClient::new(TestStateBuilder::new().build_lazy());

    let response = client
        .post_json(
            "/api/login",
            &json!({ "email": "hana@example.com", "password": "abc" }),
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Password must be at least 6 characters long."
    );
}

#[tokio::test]
async fn test_login_rejects_missing_fields() {
    let client = TestClient::new(TestStateBuilder::new().build_lazy());

    let response = client
        .post_json("/api/login", &json!({ "email": "hana@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let client = TestClient::new(TestStateBuilder::new().build_lazy());

    let response = client.post_with_auth("/api/logout", "stale-token").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.message(), "Logged out");
    assert!(response.get_cookie("auth_token").is_some());
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let state = TestStateBuilder::new().build().await.unwrap();
    let learner = db::create_user(&state.pool, Role::Standard).await.unwrap();
    let client = TestClient::new(state);

    let response = client
        .post_json(
            "/api/login",
            &json!({ "email": learner.email.to_uppercase(), "password": db::PASSWORD }),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert!(response.get_cookie("auth_token").is_some());

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["email"], learner.email.as_str());
    assert_eq!(body["user"]["role"], "standard");
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_failures() {
    let state = TestStateBuilder::new().build().await.unwrap();
    let learner = db::create_user(&state.pool, Role::Standard).await.unwrap();
    let client = TestClient::new(state);

    let response = client
        .post_json(
            "/api/login",
            &json!({ "email": learner.email, "password": "wrong-password" }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Wrong Password.");
    assert!(response.get_cookie("auth_token").is_none());

    let response = client
        .post_json(
            "/api/login",
            &json!({ "email": format!("nobody-{}@example.com", db::unique_suffix()), "password": db::PASSWORD }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "No User with this email.");
}

#[tokio::test]
async fn test_verify_token() {
    let state = TestStateBuilder::new().build().await.unwrap();
    let admin = db::create_user(&state.pool, Role::Admin).await.unwrap();
    let token = db::token_for(&admin, &state.jwt_secret);
    let client = TestClient::new(state);

    let response = client
        .post_json("/api/jwt/verify-token", &json!({ "token": token }))
        .await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Token OK!");
    assert_eq!(body["user"]["role"], "admin");

    let response = client
        .post_json("/api/jwt/verify-token", &json!({ "token": "garbage" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "No Payload in JWT Token.");

    let response = client.post_json("/api/jwt/verify-token", &json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Token not found.");
}

#[tokio::test]
async fn test_me_returns_profile() {
    let state = TestStateBuilder::new().build().await.unwrap();
    let learner = db::create_user(&state.pool, Role::Standard).await.unwrap();
    let token = db::token_for(&learner, &state.jwt_secret);
    let client = TestClient::new(state);

    let response = client.get_with_auth("/api/me", &token).await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], learner.id.to_string());
    assert_eq!(body["photoUrl"], learner.photo_url.as_str());
}
