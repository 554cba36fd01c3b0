//! Response DTOs.

use serde::{Deserialize, Serialize};

use blog_entity::blog::Blog;
use blog_entity::user::User;

/// Bare confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Wraps a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Human-readable message.
    pub message: String,
    /// The signed-in account.
    pub user: User,
    /// Session token, also set as a cookie.
    pub token: String,
}

/// Own-profile response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The caller's account.
    pub user: User,
}

/// Administrator listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminsResponse {
    /// Every administrator account.
    pub admins: Vec<User>,
}

/// Blog creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCreatedResponse {
    /// Human-readable message.
    pub message: String,
    /// The new post.
    pub blog: Blog,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Server version.
    pub version: String,
}
