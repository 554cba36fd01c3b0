//! Request DTOs.

use serde::{Deserialize, Serialize};

use blog_entity::blog::UpdateBlog;
use blog_service::user::LoginInput;

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
    /// Role to log in as.
    #[serde(default)]
    pub role: String,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            role: req.role,
        }
    }
}

/// Blog update request body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    /// New title.
    pub title: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New body.
    pub about: Option<String>,
}

impl From<UpdateBlogRequest> for UpdateBlog {
    fn from(req: UpdateBlogRequest) -> Self {
        Self {
            title: req.title,
            category: req.category,
            about: req.about,
        }
    }
}
