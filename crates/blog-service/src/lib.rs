//! # blog-service
//!
//! Business logic for CilliBlog. Each service orchestrates the stores,
//! image storage, and auth primitives to implement one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod blog;
pub mod upload;
pub mod user;
mod validation;

#[cfg(test)]
mod testing;

pub use blog::{BlogService, NewBlogInput};
pub use upload::UploadedImage;
pub use user::{AuthSession, LoginInput, RegisterInput, UserService};
