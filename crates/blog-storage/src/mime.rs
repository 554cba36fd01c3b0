//! Accepted image formats.

use blog_core::error::AppError;

/// File extension for an accepted MIME type (jpeg, png or webp).
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Reject uploads whose MIME type is not an accepted image format.
///
/// `label` names the form field in the error (e.g. "photo").
pub fn ensure_image_type(label: &str, content_type: &str) -> Result<(), AppError> {
    if extension_for(content_type).is_some() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Invalid {label} format. Only jpg, png and webp are allowed"
        )))
    }
}
