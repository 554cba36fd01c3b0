//! Integration tests for request authentication and the role gate.

mod helpers;

use chrono::Utc;
use http::StatusCode;
use uuid::Uuid;

use blog_auth::jwt::Claims;
use blog_entity::user::UserRole;

use helpers::{Auth, TEST_SECRET, TestApp};

const PROFILE: &str = "/api/users/my-profile";
const ADMIN_ONLY: &str = "/api/blogs/my-blog";

#[tokio::test]
async fn test_no_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", PROFILE, None, Auth::None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "User not authenticated");
}

#[tokio::test]
async fn test_bearer_token_resolves_principal() {
    let app = TestApp::new().await;
    let (user, token) = app.seed_with_token("reader@example.com", UserRole::User);

    let response = app.request("GET", PROFILE, None, Auth::Bearer(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], user.id.to_string());
    assert_eq!(response.body["user"]["email"], "reader@example.com");
    assert!(response.body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_cookie_token_resolves_principal() {
    let app = TestApp::new().await;
    let (user, token) = app.seed_with_token("cookie@example.com", UserRole::User);

    let response = app.request("GET", PROFILE, None, Auth::Cookie(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], user.id.to_string());
}

#[tokio::test]
async fn test_cookie_takes_precedence_over_header() {
    let app = TestApp::new().await;
    let (cookie_user, cookie_token) = app.seed_with_token("c@example.com", UserRole::User);
    let (_, header_token) = app.seed_with_token("h@example.com", UserRole::Admin);

    let response = app
        .request(
            "GET",
            PROFILE,
            None,
            Auth::Both {
                cookie: &cookie_token,
                bearer: &header_token,
            },
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], cookie_user.id.to_string());
}

#[tokio::test]
async fn test_invalid_cookie_is_not_rescued_by_valid_header() {
    let app = TestApp::new().await;
    let (_, header_token) = app.seed_with_token("valid-header@example.com", UserRole::Admin);

    let response = app
        .request(
            "GET",
            PROFILE,
            None,
            Auth::Both {
                cookie: "garbage.token.x",
                bearer: &header_token,
            },
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "User not authenticated");
}

#[tokio::test]
async fn test_scheme_word_is_not_checked() {
    let app = TestApp::new().await;
    let (user, token) = app.seed_with_token("scheme@example.com", UserRole::User);

    let header = format!("Token {token}");
    let response = app.request("GET", PROFILE, None, Auth::Header(&header)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], user.id.to_string());
}

#[tokio::test]
async fn test_header_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", PROFILE, None, Auth::Header("Bearer"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_signature_is_unauthorized() {
    let app = TestApp::new().await;
    let user = app.seed_user("forged@example.com", UserRole::Admin);

    let now = Utc::now().timestamp();
    let token = app.forge_token(
        &Claims {
            user_id: user.id,
            iat: now,
            exp: now + 3600,
        },
        "not-the-server-secret",
    );

    let response = app.request("GET", PROFILE, None, Auth::Bearer(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "User not authenticated");
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new().await;
    let user = app.seed_user("expired@example.com", UserRole::User);

    let past = Utc::now().timestamp() - 600;
    let token = app.forge_token(
        &Claims {
            user_id: user.id,
            iat: past - 3600,
            exp: past,
        },
        TEST_SECRET,
    );

    let response = app.request("GET", PROFILE, None, Auth::Cookie(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "User not authenticated");
}

#[tokio::test]
async fn test_malformed_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", PROFILE, None, Auth::Bearer("definitely.not.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_subject_is_not_found() {
    let app = TestApp::new().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app.request("GET", PROFILE, None, Auth::Bearer(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "User not found");
}

#[tokio::test]
async fn test_deleted_user_token_is_not_found() {
    let app = TestApp::new().await;
    let (user, token) = app.seed_with_token("gone@example.com", UserRole::User);
    app.users.remove(user.id);

    let response = app.request("GET", PROFILE, None, Auth::Bearer(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_role_gate_denies_non_admin() {
    let app = TestApp::new().await;
    let (_, token) = app.seed_with_token("plain@example.com", UserRole::User);

    let response = app
        .request("GET", ADMIN_ONLY, None, Auth::Bearer(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.error(),
        "Access denied: Role 'user' is not authorized"
    );
}

#[tokio::test]
async fn test_role_gate_admits_admin() {
    let app = TestApp::new().await;
    let (_, token) = app.seed_with_token("boss@example.com", UserRole::Admin);

    let response = app
        .request("GET", ADMIN_ONLY, None, Auth::Bearer(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().is_some());
}

#[tokio::test]
async fn test_role_gate_needs_authentication_first() {
    let app = TestApp::new().await;

    let response = app.request("GET", ADMIN_ONLY, None, Auth::None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repeated_requests_are_stable() {
    let app = TestApp::new().await;
    let (_, token) = app.seed_with_token("again@example.com", UserRole::User);

    let first = app.request("GET", PROFILE, None, Auth::Bearer(&token)).await;
    let second = app.request("GET", PROFILE, None, Auth::Bearer(&token)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.status, second.status);
    assert_eq!(first.body, second.body);
    assert_eq!(app.users.len(), 1);
}

#[tokio::test]
async fn test_health_and_root() {
    let app = TestApp::new().await;

    let health = app.request("GET", "/api/health", None, Auth::None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert!(health.body["version"].is_string());

    let root = app.request("GET", "/", None, Auth::None).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.text, "API is running");
}
