//! Blog repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use blog_core::error::{AppError, ErrorKind};
use blog_core::result::AppResult;
use blog_entity::blog::{Blog, CreateBlog, UpdateBlog};

use crate::store::BlogStore;

/// Repository for blog posts backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

impl BlogRepository {
    /// Create a new blog repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogStore for BlogRepository {
    async fn create(&self, data: &CreateBlog) -> AppResult<Blog> {
        sqlx::query_as::<_, Blog>(
            "INSERT INTO blogs \
             (id, title, image_public_id, image_url, category, about, admin_name, admin_photo, created_by, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.title)
        .bind(&data.blog_image.public_id)
        .bind(&data.blog_image.url)
        .bind(&data.category)
        .bind(&data.about)
        .bind(&data.admin_name)
        .bind(&data.admin_photo)
        .bind(data.created_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create blog", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Blog>> {
        sqlx::query_as::<_, Blog>("SELECT * FROM blogs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find blog", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Blog>> {
        sqlx::query_as::<_, Blog>("SELECT * FROM blogs ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list blogs", e))
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Blog>> {
        sqlx::query_as::<_, Blog>(
            "SELECT * FROM blogs WHERE created_by = $1 ORDER BY created_at DESC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list blogs by author", e)
        })
    }

    async fn update(&self, id: Uuid, data: &UpdateBlog) -> AppResult<Option<Blog>> {
        sqlx::query_as::<_, Blog>(
            "UPDATE blogs SET \
             title = COALESCE($2, title), \
             category = COALESCE($3, category), \
             about = COALESCE($4, about) \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.category)
        .bind(&data.about)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update blog", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete blog", e))?;
        Ok(result.rows_affected() > 0)
    }
}
