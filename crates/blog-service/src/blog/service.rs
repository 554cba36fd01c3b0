//! Blog post service: authoring, listing, editing, and removal.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use blog_core::error::AppError;
use blog_core::traits::ImageStorage;
use blog_database::store::BlogStore;
use blog_entity::blog::{Blog, CreateBlog, UpdateBlog};
use blog_entity::user::User;
use blog_storage::ensure_image_type;

use crate::upload::UploadedImage;
use crate::validation::{require_filled, run_rules};

/// Storage folder for blog cover images.
const IMAGE_FOLDER: &str = "blogs";

/// Minimum length of a post body, in characters.
pub const MIN_ABOUT_LENGTH: usize = 200;

const ABOUT_TOO_SHORT: &str = "Blog about must contain at least 200 characters";

/// Fields of a new post.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewBlogInput {
    /// Post title.
    pub title: String,
    /// Post category.
    pub category: String,
    /// Post body.
    #[validate(length(min = 200, message = "Blog about must contain at least 200 characters"))]
    pub about: String,
    /// Cover image.
    pub image: Option<UploadedImage>,
}

/// Handles blog post use cases.
#[derive(Debug, Clone)]
pub struct BlogService {
    blogs: Arc<dyn BlogStore>,
    images: Arc<dyn ImageStorage>,
}

impl BlogService {
    /// Creates a new blog service.
    pub fn new(blogs: Arc<dyn BlogStore>, images: Arc<dyn ImageStorage>) -> Self {
        Self { blogs, images }
    }

    /// Publishes a post authored by `author`.
    pub async fn create(&self, author: &User, input: NewBlogInput) -> Result<Blog, AppError> {
        let image = input
            .image
            .clone()
            .ok_or_else(|| AppError::validation("Blog image is required"))?;
        ensure_image_type("blogImage", &image.content_type)?;

        require_filled(&[&input.title, &input.category, &input.about])?;
        run_rules(&input)?;

        let stored = self.images.upload(image.into_upload(IMAGE_FOLDER)).await?;

        let created = self
            .blogs
            .create(&CreateBlog {
                title: input.title.trim().to_string(),
                blog_image: stored.clone().into(),
                category: input.category.trim().to_string(),
                about: input.about,
                admin_name: author.name.clone(),
                admin_photo: author.photo.url.clone(),
                created_by: author.id,
            })
            .await;

        match created {
            Ok(blog) => {
                info!(blog_id = %blog.id, author_id = %author.id, "Blog created");
                Ok(blog)
            }
            Err(e) => {
                self.discard_image(&stored.public_id).await;
                Err(e)
            }
        }
    }

    /// Every post, newest first.
    pub async fn list_all(&self) -> Result<Vec<Blog>, AppError> {
        self.blogs.find_all().await
    }

    /// A single post.
    pub async fn get(&self, id: Uuid) -> Result<Blog, AppError> {
        self.blogs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found"))
    }

    /// Posts written by `author`, newest first.
    pub async fn list_by_author(&self, author: &User) -> Result<Vec<Blog>, AppError> {
        self.blogs.find_by_author(author.id).await
    }

    /// Applies a partial update to a post.
    pub async fn update(&self, id: Uuid, changes: UpdateBlog) -> Result<Blog, AppError> {
        let blank = [&changes.title, &changes.category, &changes.about]
            .into_iter()
            .flatten()
            .any(|v| v.trim().is_empty());
        if blank {
            return Err(AppError::validation("Please fill required fields"));
        }
        let short = changes
            .about
            .as_ref()
            .is_some_and(|about| about.chars().count() < MIN_ABOUT_LENGTH);
        if short {
            return Err(AppError::validation(ABOUT_TOO_SHORT));
        }

        let blog = self
            .blogs
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found"))?;

        info!(blog_id = %id, "Blog updated");
        Ok(blog)
    }

    /// Deletes a post and, best-effort, its cover image.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let blog = self.get(id).await?;

        if !self.blogs.delete(id).await? {
            return Err(AppError::not_found("Blog not found"));
        }
        self.discard_image(&blog.blog_image.public_id).await;

        info!(blog_id = %id, "Blog deleted");
        Ok(())
    }

    async fn discard_image(&self, public_id: &str) {
        if let Err(e) = self.images.delete(public_id).await {
            warn!(public_id, error = %e, "Failed to remove blog image");
        }
    }
}
