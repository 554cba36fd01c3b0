//! In-memory blog store using `dashmap`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use blog_core::result::AppResult;
use blog_entity::blog::{Blog, CreateBlog, UpdateBlog};

use crate::store::BlogStore;

/// Concurrent in-memory blog store.
///
/// Each post carries an insertion sequence so "newest first" ordering is
/// stable even when timestamps collide.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlogStore {
    blogs: Arc<DashMap<Uuid, (u64, Blog)>>,
    sequence: Arc<AtomicU64>,
}

impl MemoryBlogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts.
    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    /// Whether the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    fn sorted_newest_first(&self, filter: impl Fn(&Blog) -> bool) -> Vec<Blog> {
        let mut entries: Vec<(u64, Blog)> = self
            .blogs
            .iter()
            .filter(|entry| filter(&entry.value().1))
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        entries.into_iter().map(|(_, blog)| blog).collect()
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn create(&self, data: &CreateBlog) -> AppResult<Blog> {
        let blog = Blog {
            id: Uuid::now_v7(),
            title: data.title.clone(),
            blog_image: data.blog_image.clone(),
            category: data.category.clone(),
            about: data.about.clone(),
            admin_name: data.admin_name.clone(),
            admin_photo: data.admin_photo.clone(),
            created_by: data.created_by,
            created_at: Utc::now(),
        };
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.blogs.insert(blog.id, (seq, blog.clone()));
        Ok(blog)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Blog>> {
        Ok(self.blogs.get(&id).map(|entry| entry.value().1.clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Blog>> {
        Ok(self.sorted_newest_first(|_| true))
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Blog>> {
        Ok(self.sorted_newest_first(|blog| blog.created_by == author_id))
    }

    async fn update(&self, id: Uuid, data: &UpdateBlog) -> AppResult<Option<Blog>> {
        Ok(self.blogs.get_mut(&id).map(|mut entry| {
            data.apply_to(&mut entry.value_mut().1);
            entry.value().1.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.blogs.remove(&id).is_some())
    }
}
