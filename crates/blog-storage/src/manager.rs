//! Construction of the configured image storage backend.

use std::sync::Arc;

use tracing::info;

use blog_core::config::{StorageConfig, StorageProvider};
use blog_core::result::AppResult;
use blog_core::traits::ImageStorage;

use crate::providers::{CloudinaryImageStorage, LocalImageStorage};

/// Build the image storage backend selected in configuration.
pub async fn build_image_storage(config: &StorageConfig) -> AppResult<Arc<dyn ImageStorage>> {
    let storage: Arc<dyn ImageStorage> = match config.provider {
        StorageProvider::Local => Arc::new(LocalImageStorage::new(&config.local).await?),
        StorageProvider::Cloudinary => Arc::new(CloudinaryImageStorage::new(&config.cloudinary)?),
    };

    info!(provider = storage.provider_type(), "Image storage initialized");
    Ok(storage)
}
