//! User handlers: register, login, logout, profile, admins.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use axum_extra::extract::cookie::CookieJar;

use blog_service::user::{AuthSession, RegisterInput};

use crate::cookie::{clearing_cookie, session_cookie};
use crate::dto::request::LoginRequest;
use crate::dto::response::{AdminsResponse, AuthResponse, MessageResponse, ProfileResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, MultipartForm};
use crate::state::AppState;

fn signed_in(
    state: &AppState,
    jar: CookieJar,
    session: AuthSession,
    message: &str,
) -> (CookieJar, Json<AuthResponse>) {
    let ttl = session.token.expires_at - chrono::Utc::now();
    let cookie = session_cookie(&state.config.auth.cookie, &session.token.token, ttl);

    (
        jar.add(cookie),
        Json(AuthResponse {
            message: message.to_string(),
            user: session.user,
            token: session.token.token,
        }),
    )
}

/// POST /api/users/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    mut form: MultipartForm,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), ApiError> {
    let input = RegisterInput {
        name: form.text("name"),
        email: form.text("email"),
        phone: form.text("phone"),
        password: form.text("password"),
        role: form.text("role"),
        education: form.text("education"),
        photo: form.take_file("photo"),
    };

    let session = state.user_service.register(input).await?;
    let (jar, body) = signed_in(&state, jar, session, "User registered successfully");

    Ok((StatusCode::CREATED, jar, body))
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let session = state.user_service.login(req.into()).await?;
    Ok(signed_in(&state, jar, session, "User logged in successfully"))
}

/// GET /api/users/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.add(clearing_cookie(&state.config.auth.cookie)),
        Json(MessageResponse::new("User logged out successfully")),
    )
}

/// GET /api/users/my-profile
pub async fn my_profile(State(state): State<AppState>, auth: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user: state.user_service.profile(&auth),
    })
}

/// GET /api/users/admins
pub async fn admins(State(state): State<AppState>) -> Result<Json<AdminsResponse>, ApiError> {
    let admins = state.user_service.admins().await?;
    Ok(Json(AdminsResponse { admins }))
}
