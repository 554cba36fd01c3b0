//! Images received from clients before they are stored.

use bytes::Bytes;

use blog_core::traits::ImageUpload;

/// A file part received in a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Client-supplied file name.
    pub file_name: Option<String>,
    /// Client-supplied MIME type.
    pub content_type: String,
    /// File contents.
    pub data: Bytes,
}

impl UploadedImage {
    /// Address this image to a storage folder.
    pub fn into_upload(self, folder: &str) -> ImageUpload {
        ImageUpload {
            folder: folder.to_string(),
            file_name: self.file_name,
            content_type: self.content_type,
            data: self.data,
        }
    }
}
