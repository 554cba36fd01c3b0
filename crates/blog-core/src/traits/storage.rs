//! Image storage trait for pluggable upload backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// An image received from a client, ready to be stored.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Logical folder grouping (e.g. `"users"`, `"blogs"`).
    pub folder: String,
    /// File name as sent by the client, if any.
    pub file_name: Option<String>,
    /// MIME type as sent by the client.
    pub content_type: String,
    /// Raw image bytes.
    pub data: Bytes,
}

/// Location of a stored image.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredImage {
    /// Provider-specific identifier used for deletion.
    pub public_id: String,
    /// Publicly reachable URL.
    pub url: String,
}

/// Trait for image storage backends.
///
/// Implementations for the local filesystem and Cloudinary live in
/// `blog-storage`.
#[async_trait]
pub trait ImageStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g. `"local"`, `"cloudinary"`).
    fn provider_type(&self) -> &str;

    /// Store an image and return where it can be reached.
    async fn upload(&self, image: ImageUpload) -> AppResult<StoredImage>;

    /// Remove a previously stored image.
    async fn delete(&self, public_id: &str) -> AppResult<()>;
}
