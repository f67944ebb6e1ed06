// src/presentation/http/controllers/directory.rs
use crate::application::dto::{BusinessDto, CategoryDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Canonical categories with their URL slugs.", body = [CategoryDto])
    ),
    tag = "Directory"
)]
pub async fn list_categories(Extension(state): Extension<HttpState>) -> Json<Vec<CategoryDto>> {
    Json(state.services.directory.list_categories())
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug, aliases accepted")),
    responses(
        (status = 200, description = "Display name for the slug.", body = CategoryDto)
    ),
    tag = "Directory"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> Json<CategoryDto> {
    Json(state.services.directory.resolve_category(&slug))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}/businesses",
    params(("slug" = String, Path, description = "Category slug, aliases accepted")),
    responses(
        (status = 200, description = "Approved listings in the category, by name.", body = [BusinessDto])
    ),
    tag = "Directory"
)]
pub async fn list_category_businesses(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<BusinessDto>>> {
    state
        .services
        .directory
        .list_businesses_in_category(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/businesses/{slug}",
    params(("slug" = String, Path, description = "Listing slug")),
    responses(
        (status = 200, description = "Approved listing with rendered description.", body = BusinessDto),
        (status = 404, description = "Unknown or unapproved listing.", body = ErrorResponse)
    ),
    tag = "Directory"
)]
pub async fn get_business(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<BusinessDto>> {
    state
        .services
        .directory
        .get_business(&slug)
        .await
        .into_http()
        .map(Json)
}
