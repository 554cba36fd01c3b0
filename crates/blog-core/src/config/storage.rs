//! Image storage configuration.

use serde::{Deserialize, Serialize};

/// Which backend receives uploaded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    /// Files under a local directory, served by the API.
    #[default]
    Local,
    /// Cloudinary image CDN.
    Cloudinary,
}

/// Image storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selection.
    #[serde(default)]
    pub provider: StorageProvider,
    /// Local filesystem settings.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// Cloudinary credentials.
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
}

/// Local filesystem image storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root directory for stored images.
    #[serde(default = "default_root")]
    pub root: String,
    /// URL prefix under which the root directory is served.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            public_base_url: default_public_base_url(),
        }
    }
}

/// Cloudinary account credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudinaryConfig {
    /// Cloud name.
    #[serde(default)]
    pub cloud_name: String,
    /// API key.
    #[serde(default)]
    pub api_key: String,
    /// API secret used to sign uploads.
    #[serde(default)]
    pub api_secret: String,
}

fn default_root() -> String {
    "data/uploads".to_string()
}

fn default_public_base_url() -> String {
    "/uploads".to_string()
}
