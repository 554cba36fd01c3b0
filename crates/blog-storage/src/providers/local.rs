//! Local filesystem image storage.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use blog_core::config::LocalStorageConfig;
use blog_core::error::{AppError, ErrorKind};
use blog_core::result::AppResult;
use blog_core::traits::{ImageStorage, ImageUpload, StoredImage};

use crate::mime::extension_for;

/// Stores images under a root directory that the API serves statically.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    /// Root directory for all stored images.
    root: PathBuf,
    /// URL prefix mapped onto `root`, without a trailing slash.
    public_base_url: String,
}

impl LocalImageStorage {
    /// Create a provider rooted at the configured directory, creating it if needed.
    pub async fn new(config: &LocalStorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Root directory on disk.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a public ID to a path inside the root, refusing escapes.
    fn resolve(&self, public_id: &str) -> AppResult<PathBuf> {
        let relative = Path::new(public_id);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe || public_id.is_empty() {
            return Err(AppError::validation(format!(
                "Invalid image identifier: {public_id}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

/// Keep folder names to a single safe path segment.
fn sanitize_folder(folder: &str) -> String {
    let cleaned: String = folder
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        "misc".to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn upload(&self, image: ImageUpload) -> AppResult<StoredImage> {
        let ext = extension_for(&image.content_type).ok_or_else(|| {
            AppError::validation(format!("Unsupported image type: {}", image.content_type))
        })?;

        let folder = sanitize_folder(&image.folder);
        let public_id = format!("{folder}/{}.{ext}", Uuid::new_v4());
        let full_path = self.resolve(&public_id)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        fs::write(&full_path, &image.data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write image: {public_id}"),
                e,
            )
        })?;

        debug!(public_id = %public_id, bytes = image.data.len(), "Stored image");

        Ok(StoredImage {
            url: format!("{}/{}", self.public_base_url, public_id),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> AppResult<()> {
        let full_path = self.resolve(public_id)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(public_id, "Deleted image");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete image: {public_id}"),
                e,
            )),
        }
    }
}
