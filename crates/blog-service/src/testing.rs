//! Test doubles shared by the service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use blog_core::result::AppResult;
use blog_core::traits::{ImageStorage, ImageUpload, StoredImage};

use crate::upload::UploadedImage;

/// Image storage that records calls instead of writing anywhere.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingImageStorage {
    uploaded: Arc<Mutex<Vec<String>>>,
    deleted: Arc<Mutex<Vec<String>>>,
}

impl RecordingImageStorage {
    pub(crate) fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }

    pub(crate) fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for RecordingImageStorage {
    fn provider_type(&self) -> &str {
        "recording"
    }

    async fn upload(&self, image: ImageUpload) -> AppResult<StoredImage> {
        let mut uploaded = self.uploaded.lock().unwrap();
        let public_id = format!("{}/{}", image.folder, uploaded.len());
        uploaded.push(public_id.clone());
        Ok(StoredImage {
            url: format!("/uploads/{public_id}.png"),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> AppResult<()> {
        self.deleted.lock().unwrap().push(public_id.to_string());
        Ok(())
    }
}

pub(crate) fn png() -> UploadedImage {
    UploadedImage {
        file_name: Some("pic.png".to_string()),
        content_type: "image/png".to_string(),
        data: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
    }
}
