//! Image reference embedded in users and blogs.

use serde::{Deserialize, Serialize};

use blog_core::traits::StoredImage;

/// A stored image: the storage key plus its public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Storage-provider identifier, needed to delete the image.
    pub public_id: String,
    /// Public URL.
    pub url: String,
}

impl From<StoredImage> for ImageAsset {
    fn from(stored: StoredImage) -> Self {
        Self {
            public_id: stored.public_id,
            url: stored.url,
        }
    }
}
