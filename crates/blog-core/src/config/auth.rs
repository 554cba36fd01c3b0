//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Longest token lifetime accepted from configuration, in days.
pub const MAX_TOKEN_TTL_DAYS: u64 = 365;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in days.
    #[serde(default = "default_token_ttl")]
    pub jwt_ttl_days: u64,
    /// Allowed clock skew when checking `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub jwt_leeway_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Session cookie settings.
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_ttl_days: default_token_ttl(),
            jwt_leeway_seconds: default_leeway(),
            password_min_length: default_password_min(),
            cookie: CookieConfig::default(),
        }
    }
}

/// Settings for the `jwt` session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Cookie name carrying the token.
    #[serde(default = "default_cookie_name")]
    pub name: String,
    /// Whether to set the `Secure` flag.
    #[serde(default = "default_true")]
    pub secure: bool,
    /// `SameSite` policy: `"strict"`, `"lax"` or `"none"`.
    #[serde(default = "default_same_site")]
    pub same_site: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            secure: default_true(),
            same_site: default_same_site(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    7
}

fn default_leeway() -> u64 {
    5
}

fn default_password_min() -> usize {
    8
}

fn default_cookie_name() -> String {
    "jwt".to_string()
}

fn default_true() -> bool {
    true
}

fn default_same_site() -> String {
    "none".to_string()
}
