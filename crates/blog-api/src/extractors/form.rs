//! Buffered multipart form extractor.

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Request};

use blog_service::upload::UploadedImage;

use crate::error::ApiError;

/// A multipart form read fully into memory: text fields and file parts.
///
/// A part with a file name is treated as a file, everything else as text.
/// Later parts with the same name replace earlier ones.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedImage>,
}

impl MultipartForm {
    /// Text value of a field, empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Take a file part out of the form.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedImage> {
        self.files.remove(name)
    }
}

impl<S: Send + Sync> FromRequest<S> for MultipartForm {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await?;
        let mut form = MultipartForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field.bytes().await?;
                    if data.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        UploadedImage {
                            file_name: Some(file_name),
                            content_type,
                            data,
                        },
                    );
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }
}
