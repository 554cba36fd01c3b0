//! Integration tests for blog endpoints.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use blog_entity::user::UserRole;

use helpers::{Auth, FilePart, TestApp, long_about, png_part};

const CREATE: &str = "/api/blogs/create";

async fn create_blog(app: &TestApp, token: &str, title: &str) -> Value {
    let about = long_about();
    let response = app
        .multipart(
            "POST",
            CREATE,
            &[("title", title), ("category", "Rust"), ("about", about.as_str())],
            &[png_part("blogImage")],
            Auth::Bearer(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Create failed: {:?}",
        response.body
    );
    response.body["blog"].clone()
}

#[tokio::test]
async fn test_admin_creates_blog() {
    let app = TestApp::new().await;
    let (admin, token) = app.register_admin("author@example.com").await;

    let about = long_about();
    let response = app
        .multipart(
            "POST",
            CREATE,
            &[
                ("title", "Ownership explained"),
                ("category", "Rust"),
                ("about", about.as_str()),
            ],
            &[png_part("blogImage")],
            Auth::Cookie(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Blog created successfully");

    let blog = &response.body["blog"];
    assert_eq!(blog["title"], "Ownership explained");
    assert_eq!(blog["adminName"], "Admin Author");
    assert_eq!(blog["adminPhoto"], admin["photo"]["url"]);
    assert_eq!(blog["createdBy"], admin["id"]);

    let public_id = blog["blogImage"]["public_id"].as_str().unwrap();
    assert!(public_id.starts_with("blogs/"));
    assert!(app.uploads.path().join(public_id).exists());
}

#[tokio::test]
async fn test_user_cannot_create_blog() {
    let app = TestApp::new().await;
    let (_, token) = app.seed_with_token("reader@example.com", UserRole::User);

    let about = long_about();
    let response = app
        .multipart(
            "POST",
            CREATE,
            &[("title", "Nope"), ("category", "Rust"), ("about", about.as_str())],
            &[png_part("blogImage")],
            Auth::Bearer(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.error(),
        "Access denied: Role 'user' is not authorized"
    );
    assert!(app.blogs.is_empty());
}

#[tokio::test]
async fn test_create_requires_image() {
    let app = TestApp::new().await;
    let (_, token) = app.seed_with_token("noimg@example.com", UserRole::Admin);

    let about = long_about();
    let response = app
        .multipart(
            "POST",
            CREATE,
            &[("title", "Bare"), ("category", "Rust"), ("about", about.as_str())],
            &[],
            Auth::Bearer(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Blog image is required");
}

#[tokio::test]
async fn test_create_rejects_unsupported_image_type() {
    let app = TestApp::new().await;
    let (_, token) = app.seed_with_token("gifblog@example.com", UserRole::Admin);

    let about = long_about();
    let response = app
        .multipart(
            "POST",
            CREATE,
            &[("title", "Animated"), ("category", "Rust"), ("about", about.as_str())],
            &[FilePart {
                field: "blogImage",
                file_name: "anim.gif",
                content_type: "image/gif",
                data: b"GIF89a",
            }],
            Auth::Bearer(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().contains("blogImage"));
    assert!(app.blogs.is_empty());
}

#[tokio::test]
async fn test_create_rejects_short_body() {
    let app = TestApp::new().await;
    let (_, token) = app.seed_with_token("short@example.com", UserRole::Admin);

    let response = app
        .multipart(
            "POST",
            CREATE,
            &[("title", "Tiny"), ("category", "Rust"), ("about", "Too short.")],
            &[png_part("blogImage")],
            Auth::Bearer(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().contains("200"));
}

#[tokio::test]
async fn test_all_blogs_is_public_and_newest_first() {
    let app = TestApp::new().await;
    let (_, token) = app.register_admin("lister@example.com").await;
    create_blog(&app, &token, "First").await;
    create_blog(&app, &token, "Second").await;

    let response = app
        .request("GET", "/api/blogs/all-blogs", None, Auth::None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let blogs = response.body.as_array().unwrap();
    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[0]["title"], "Second");
    assert_eq!(blogs[1]["title"], "First");
}

#[tokio::test]
async fn test_single_blog_requires_authentication() {
    let app = TestApp::new().await;
    let (_, admin_token) = app.register_admin("single@example.com").await;
    let blog = create_blog(&app, &admin_token, "Readable").await;
    let path = format!("/api/blogs/single-blog/{}", blog["id"].as_str().unwrap());

    let anonymous = app.request("GET", &path, None, Auth::None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let (_, reader_token) = app.seed_with_token("fan@example.com", UserRole::User);
    let response = app
        .request("GET", &path, None, Auth::Bearer(&reader_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Readable");
}

#[tokio::test]
async fn test_single_blog_bad_and_unknown_ids() {
    let app = TestApp::new().await;
    let (_, token) = app.seed_with_token("ids@example.com", UserRole::User);

    let malformed = app
        .request(
            "GET",
            "/api/blogs/single-blog/not-a-uuid",
            None,
            Auth::Bearer(&token),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "GET",
            &format!("/api/blogs/single-blog/{}", Uuid::new_v4()),
            None,
            Auth::Bearer(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error(), "Blog not found");
}

#[tokio::test]
async fn test_my_blog_lists_only_own_posts() {
    let app = TestApp::new().await;
    let (_, first_token) = app.register_admin("one@example.com").await;
    let (_, second_token) = app.register_admin("two@example.com").await;
    create_blog(&app, &first_token, "Mine").await;
    create_blog(&app, &second_token, "Theirs").await;

    let response = app
        .request("GET", "/api/blogs/my-blog", None, Auth::Bearer(&first_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let blogs = response.body.as_array().unwrap();
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0]["title"], "Mine");
}

#[tokio::test]
async fn test_update_blog() {
    let app = TestApp::new().await;
    let (_, token) = app.register_admin("editor@example.com").await;
    let blog = create_blog(&app, &token, "Draft").await;
    let path = format!("/api/blogs/update/{}", blog["id"].as_str().unwrap());

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": "Published" })),
            Auth::Bearer(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Published");
    assert_eq!(response.body["category"], "Rust");

    let missing = app
        .request(
            "PUT",
            &format!("/api/blogs/update/{}", Uuid::new_v4()),
            Some(json!({ "title": "Nothing" })),
            Auth::Bearer(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_requires_admin() {
    let app = TestApp::new().await;
    let (_, admin_token) = app.register_admin("owner@example.com").await;
    let blog = create_blog(&app, &admin_token, "Guarded").await;
    let (_, user_token) = app.seed_with_token("vandal@example.com", UserRole::User);

    let response = app
        .request(
            "PUT",
            &format!("/api/blogs/update/{}", blog["id"].as_str().unwrap()),
            Some(json!({ "title": "Defaced" })),
            Auth::Bearer(&user_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_blog_removes_post_and_image() {
    let app = TestApp::new().await;
    let (_, token) = app.register_admin("cleaner@example.com").await;
    let blog = create_blog(&app, &token, "Temporary").await;
    let image_path = app
        .uploads
        .path()
        .join(blog["blogImage"]["public_id"].as_str().unwrap());
    assert!(image_path.exists());

    let path = format!("/api/blogs/delete/{}", blog["id"].as_str().unwrap());
    let response = app.request("DELETE", &path, None, Auth::Bearer(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Blog deleted successfully");
    assert!(app.blogs.is_empty());
    assert!(!image_path.exists());

    let again = app.request("DELETE", &path, None, Auth::Bearer(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
