//! User entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

use super::role::UserRole;
use crate::image::ImageAsset;

/// A registered user. Resolved from the token subject as the request principal.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name shown on posts.
    pub name: String,
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Profile photo.
    pub photo: ImageAsset,
    /// Education level.
    pub education: String,
    /// Role used by the role gate.
    pub role: UserRole,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("photo", &self.photo)
            .field("education", &self.education)
            .field("role", &self.role)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            photo: ImageAsset {
                public_id: row.try_get("photo_public_id")?,
                url: row.try_get("photo_url")?,
            },
            education: row.try_get("education")?,
            role: row.try_get("role")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Uploaded profile photo.
    pub photo: ImageAsset,
    /// Education level.
    pub education: String,
    /// Assigned role.
    pub role: UserRole,
    /// Pre-hashed password.
    pub password_hash: String,
}
