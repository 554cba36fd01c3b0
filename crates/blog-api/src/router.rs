//! Route definitions for the CilliBlog HTTP API.
//!
//! Resource routes are mounted under `/api`. Uploaded images are served
//! from `/uploads` when the local storage provider is active.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use blog_core::config::StorageProvider;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .nest("/users", user_routes(&state))
        .nest("/blogs", blog_routes(&state))
        .route("/health", get(handlers::health::health));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let mut router = Router::new()
        .route("/", get(handlers::health::root))
        .nest("/api", api_routes);

    if state.config.storage.provider == StorageProvider::Local {
        let local = &state.config.storage.local;
        let mount = local.public_base_url.trim_end_matches('/');
        if mount.starts_with('/') && mount.len() > 1 {
            router = router.nest_service(mount, ServeDir::new(&local.root));
        }
    }

    router
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Account endpoints
fn user_routes(state: &AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/my-profile", get(handlers::user::my_profile))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/register", post(handlers::user::register))
        .route("/login", post(handlers::user::login))
        .route("/logout", get(handlers::user::logout))
        .route("/admins", get(handlers::user::admins))
        .merge(authenticated)
}

/// Blog endpoints. Admin-only handlers apply the role gate via `Authorized`.
fn blog_routes(state: &AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/create", post(handlers::blog::create))
        .route("/delete/{id}", delete(handlers::blog::delete))
        .route("/single-blog/{id}", get(handlers::blog::single_blog))
        .route("/my-blog", get(handlers::blog::my_blogs))
        .route("/update/{id}", put(handlers::blog::update))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/all-blogs", get(handlers::blog::all_blogs))
        .merge(authenticated)
}
