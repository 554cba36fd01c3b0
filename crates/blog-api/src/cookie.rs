//! Session cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};

use blog_core::config::CookieConfig;

fn same_site(config: &CookieConfig) -> SameSite {
    match config.same_site.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "lax" => SameSite::Lax,
        _ => SameSite::None,
    }
}

/// HttpOnly cookie carrying a session token for `ttl`.
pub fn session_cookie(
    config: &CookieConfig,
    token: &str,
    ttl: chrono::Duration,
) -> Cookie<'static> {
    Cookie::build((config.name.clone(), token.to_string()))
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(config))
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build()
}

/// Expired, empty cookie that makes the browser drop the session.
pub fn clearing_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((config.name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(config))
        .max_age(time::Duration::ZERO)
        .expires(time::OffsetDateTime::UNIX_EPOCH)
        .build()
}
