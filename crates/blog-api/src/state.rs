//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use blog_auth::authenticator::Authenticator;
use blog_core::config::AppConfig;
use blog_service::blog::BlogService;
use blog_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Verifies session tokens and resolves the principal
    pub authenticator: Arc<Authenticator>,
    /// Registration, login, and profile lookups
    pub user_service: Arc<UserService>,
    /// Blog post management
    pub blog_service: Arc<BlogService>,
}
