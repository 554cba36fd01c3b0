//! Cloudinary image storage over the signed upload REST API.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use blog_core::config::CloudinaryConfig;
use blog_core::error::{AppError, ErrorKind};
use blog_core::result::AppResult;
use blog_core::traits::{ImageStorage, ImageUpload, StoredImage};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Uploads images to a Cloudinary account.
#[derive(Debug, Clone)]
pub struct CloudinaryImageStorage {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryImageStorage {
    /// Create a provider from account credentials.
    pub fn new(config: &CloudinaryConfig) -> AppResult<Self> {
        if config.cloud_name.is_empty() || config.api_key.is_empty() || config.api_secret.is_empty()
        {
            return Err(AppError::configuration(
                "Cloudinary cloud_name, api_key and api_secret are required",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{API_BASE}/{}/image/{action}", self.cloud_name)
    }

    /// Signs `params` the way Cloudinary expects: sorted `k=v` pairs joined
    /// by `&`, followed by the API secret, hashed with SHA-256. The account
    /// must have SHA-256 signatures enabled.
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        let joined = sorted
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(joined.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    async fn error_from(response: reqwest::Response) -> AppError {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => "no error body".to_string(),
        };
        AppError::external_service(format!("Cloudinary returned {status}: {message}"))
    }
}

#[async_trait]
impl ImageStorage for CloudinaryImageStorage {
    fn provider_type(&self) -> &str {
        "cloudinary"
    }

    async fn upload(&self, image: ImageUpload) -> AppResult<StoredImage> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[
            ("folder", image.folder.as_str()),
            ("timestamp", timestamp.as_str()),
        ]);

        let part = Part::bytes(image.data.to_vec())
            .file_name(image.file_name.clone().unwrap_or_else(|| "upload".to_string()))
            .mime_str(&image.content_type)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Validation, "Invalid image content type", e)
            })?;

        let form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", image.folder.clone())
            .text("signature", signature);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Cloudinary upload failed", e)
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: UploadResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Unexpected Cloudinary upload response",
                e,
            )
        })?;

        debug!(public_id = %body.public_id, "Uploaded image to Cloudinary");

        Ok(StoredImage {
            public_id: body.public_id,
            url: body.secure_url,
        })
    }

    async fn delete(&self, public_id: &str) -> AppResult<()> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[("public_id", public_id), ("timestamp", timestamp.as_str())]);

        let form = Form::new()
            .text("public_id", public_id.to_string())
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature);

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Cloudinary destroy failed", e)
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: DestroyResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Unexpected Cloudinary destroy response",
                e,
            )
        })?;

        if body.result != "ok" && body.result != "not found" {
            warn!(public_id, result = %body.result, "Cloudinary did not delete image");
        }
        Ok(())
    }
}
