//! Integration tests for registration, login, logout, and user listings.

mod helpers;

use http::StatusCode;
use serde_json::json;

use blog_entity::user::UserRole;

use helpers::{Auth, FilePart, TEST_PASSWORD, TestApp, png_part};

const REGISTER: &str = "/api/users/register";
const LOGIN: &str = "/api/users/login";

fn registration<'a>(email: &'a str, role: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "Ada Lovelace"),
        ("email", email),
        ("phone", "5550100"),
        ("password", TEST_PASSWORD),
        ("role", role),
        ("education", "Mathematics"),
    ]
}

#[tokio::test]
async fn test_register_sets_cookie_and_returns_user() {
    let app = TestApp::new().await;

    let response = app
        .multipart(
            "POST",
            REGISTER,
            &registration("ada@example.com", "user"),
            &[png_part("photo")],
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User registered successfully");
    assert_eq!(response.body["user"]["email"], "ada@example.com");
    assert_eq!(response.body["user"]["role"], "user");
    assert!(response.body["user"].get("passwordHash").is_none());

    let token = response.body["token"].as_str().unwrap();
    let cookie = response.set_cookie.expect("register sets a cookie");
    assert!(cookie.starts_with(&format!("jwt={token}")));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));

    let profile = app
        .request("GET", "/api/users/my-profile", None, Auth::Cookie(token))
        .await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_register_stores_and_serves_photo() {
    let app = TestApp::new().await;

    let response = app
        .multipart(
            "POST",
            REGISTER,
            &registration("photo@example.com", "user"),
            &[png_part("photo")],
            Auth::None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let public_id = response.body["user"]["photo"]["public_id"].as_str().unwrap();
    assert!(public_id.starts_with("users/"));
    assert!(app.uploads.path().join(public_id).exists());

    let url = response.body["user"]["photo"]["url"].as_str().unwrap();
    let served = app.request("GET", url, None, Auth::None).await;
    assert_eq!(served.status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_requires_photo() {
    let app = TestApp::new().await;

    let response = app
        .multipart(
            "POST",
            REGISTER,
            &registration("nophoto@example.com", "user"),
            &[],
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "User photo is required");
    assert!(app.users.is_empty());
}

#[tokio::test]
async fn test_register_rejects_unsupported_photo_type() {
    let app = TestApp::new().await;

    let response = app
        .multipart(
            "POST",
            REGISTER,
            &registration("gif@example.com", "user"),
            &[FilePart {
                field: "photo",
                file_name: "anim.gif",
                content_type: "image/gif",
                data: b"GIF89a",
            }],
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().contains("photo"));
}

#[tokio::test]
async fn test_register_rejects_non_multipart_body() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            REGISTER,
            Some(json!({ "email": "json@example.com" })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
    assert!(app.users.is_empty());
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let app = TestApp::new().await;

    let response = app
        .multipart(
            "POST",
            REGISTER,
            &[("name", "Half Filled"), ("email", "half@example.com")],
            &[png_part("photo")],
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Please fill required fields");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.seed_user("taken@example.com", UserRole::User);

    let response = app
        .multipart(
            "POST",
            REGISTER,
            &registration("taken@example.com", "user"),
            &[png_part("photo")],
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error(), "User already exists with this email");
}

#[tokio::test]
async fn test_login_success_sets_cookie() {
    let app = TestApp::new().await;
    let user = app.seed_user("login@example.com", UserRole::Admin);

    let response = app
        .request(
            "POST",
            LOGIN,
            Some(json!({
                "email": "login@example.com",
                "password": TEST_PASSWORD,
                "role": "admin",
            })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User logged in successfully");
    assert_eq!(response.body["user"]["id"], user.id.to_string());
    assert!(response.body["token"].is_string());
    assert!(response.set_cookie.unwrap().starts_with("jwt="));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.seed_user("pw@example.com", UserRole::User);

    let response = app
        .request(
            "POST",
            LOGIN,
            Some(json!({
                "email": "pw@example.com",
                "password": "not-the-password",
                "role": "user",
            })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid email or password");
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            LOGIN,
            Some(json!({
                "email": "ghost@example.com",
                "password": TEST_PASSWORD,
                "role": "user",
            })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid email or password");
}

#[tokio::test]
async fn test_login_role_mismatch_is_forbidden() {
    let app = TestApp::new().await;
    app.seed_user("role@example.com", UserRole::User);

    let response = app
        .request(
            "POST",
            LOGIN,
            Some(json!({
                "email": "role@example.com",
                "password": TEST_PASSWORD,
                "role": "admin",
            })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error(), "Given role admin not found");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            LOGIN,
            Some(json!({ "email": "x@example.com" })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Please fill required fields");
}

#[tokio::test]
async fn test_login_rejects_non_json_body() {
    let app = TestApp::new().await;

    let response = app
        .multipart("POST", LOGIN, &[("email", "x@example.com")], &[], Auth::None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/users/logout", None, Auth::None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User logged out successfully");

    let cookie = response.set_cookie.expect("logout sets a cookie");
    assert!(cookie.starts_with("jwt=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_admins_lists_only_admins() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin@example.com", UserRole::Admin);
    app.seed_user("user@example.com", UserRole::User);

    let response = app
        .request("GET", "/api/users/admins", None, Auth::None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let admins = response.body["admins"].as_array().unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0]["id"], admin.id.to_string());
}
