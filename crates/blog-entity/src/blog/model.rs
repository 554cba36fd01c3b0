//! Blog post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

use crate::image::ImageAsset;

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Unique post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Cover image.
    pub blog_image: ImageAsset,
    /// Free-form category (e.g. "Devotion", "Sports").
    pub category: String,
    /// Post body.
    pub about: String,
    /// Author name, copied at creation time.
    pub admin_name: String,
    /// Author photo URL, copied at creation time.
    pub admin_photo: String,
    /// Author user ID.
    pub created_by: Uuid,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for Blog {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            blog_image: ImageAsset {
                public_id: row.try_get("image_public_id")?,
                url: row.try_get("image_url")?,
            },
            category: row.try_get("category")?,
            about: row.try_get("about")?,
            admin_name: row.try_get("admin_name")?,
            admin_photo: row.try_get("admin_photo")?,
            created_by: row.try_get("created_by")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Data required to create a blog post.
#[derive(Debug, Clone)]
pub struct CreateBlog {
    /// Post title.
    pub title: String,
    /// Uploaded cover image.
    pub blog_image: ImageAsset,
    /// Category.
    pub category: String,
    /// Post body.
    pub about: String,
    /// Author name.
    pub admin_name: String,
    /// Author photo URL.
    pub admin_photo: String,
    /// Author user ID.
    pub created_by: Uuid,
}

/// Partial update of a blog post. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlog {
    /// New title.
    pub title: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New body.
    pub about: Option<String>,
}

impl UpdateBlog {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.about.is_none()
    }

    /// Apply the present fields to a post in place.
    pub fn apply_to(&self, blog: &mut Blog) {
        if let Some(title) = &self.title {
            blog.title = title.clone();
        }
        if let Some(category) = &self.category {
            blog.category = category.clone();
        }
        if let Some(about) = &self.about {
            blog.about = about.clone();
        }
    }
}
