//! Blog handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;

use blog_entity::blog::Blog;
use blog_service::blog::NewBlogInput;

use crate::dto::request::UpdateBlogRequest;
use crate::dto::response::{BlogCreatedResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AdminRole, AuthUser, Authorized, MultipartForm};
use crate::state::AppState;

/// POST /api/blogs/create
pub async fn create(
    State(state): State<AppState>,
    admin: Authorized<AdminRole>,
    mut form: MultipartForm,
) -> Result<(StatusCode, Json<BlogCreatedResponse>), ApiError> {
    let input = NewBlogInput {
        title: form.text("title"),
        category: form.text("category"),
        about: form.text("about"),
        image: form.take_file("blogImage"),
    };

    let blog = state
        .blog_service
        .create(admin.principal(), input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogCreatedResponse {
            message: "Blog created successfully".to_string(),
            blog,
        }),
    ))
}

/// DELETE /api/blogs/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: Authorized<AdminRole>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_uuid(&id)?;
    state.blog_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Blog deleted successfully")))
}

/// GET /api/blogs/all-blogs
pub async fn all_blogs(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, ApiError> {
    Ok(Json(state.blog_service.list_all().await?))
}

/// GET /api/blogs/single-blog/{id}
pub async fn single_blog(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Blog>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.blog_service.get(id).await?))
}

/// GET /api/blogs/my-blog
pub async fn my_blogs(
    State(state): State<AppState>,
    admin: Authorized<AdminRole>,
) -> Result<Json<Vec<Blog>>, ApiError> {
    Ok(Json(
        state.blog_service.list_by_author(admin.principal()).await?,
    ))
}

/// PUT /api/blogs/update/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: Authorized<AdminRole>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateBlogRequest>, ApiError>,
) -> Result<Json<Blog>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.blog_service.update(id, req.into()).await?))
}
