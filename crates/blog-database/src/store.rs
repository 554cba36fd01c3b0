//! Store traits consumed by the auth and service layers.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`]
//! and an in-memory one in [`crate::memory`].

use async_trait::async_trait;
use uuid::Uuid;

use blog_core::result::AppResult;
use blog_entity::blog::{Blog, CreateBlog, UpdateBlog};
use blog_entity::user::{CreateUser, User, UserRole};

/// Persistence for registered users.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users holding the given role, oldest first.
    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;

    /// Create a new user. Fails with a conflict if the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Persistence for blog posts.
#[async_trait]
pub trait BlogStore: Send + Sync + std::fmt::Debug + 'static {
    /// Create a new post.
    async fn create(&self, data: &CreateBlog) -> AppResult<Blog>;

    /// Find a post by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Blog>>;

    /// List every post, newest first.
    async fn find_all(&self) -> AppResult<Vec<Blog>>;

    /// List posts written by the given user, newest first.
    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Blog>>;

    /// Apply a partial update. Returns `None` if the post does not exist.
    async fn update(&self, id: Uuid, data: &UpdateBlog) -> AppResult<Option<Blog>>;

    /// Delete a post. Returns `true` if a post was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
