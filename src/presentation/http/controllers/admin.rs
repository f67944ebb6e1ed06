// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::moderation::{ListBusinessesQuery, ModerateBusinessCommand, ModerationDecision},
    dto::{AdminBusinessDto, ContactMessageDto, SubscriberDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AdminBusinessListParams {
    /// `pending`, `approved` or `rejected`; all listings when omitted.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerationRequest {
    /// `approve` or `reject`.
    pub decision: String,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ContactListParams {
    #[serde(default)]
    pub unread_only: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/businesses",
    params(AdminBusinessListParams),
    responses(
        (status = 200, description = "Listings for moderation, oldest first.", body = [AdminBusinessDto]),
        (status = 401, description = "Missing or invalid admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_businesses(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(actor): AdminAuthenticated,
    Query(params): Query<AdminBusinessListParams>,
) -> HttpResult<Json<Vec<AdminBusinessDto>>> {
    state
        .services
        .moderation
        .list_businesses(&actor, ListBusinessesQuery { status: params.status })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/businesses/{id}/moderation",
    params(("id" = i64, Path, description = "Listing id")),
    request_body = ModerationRequest,
    responses(
        (status = 200, description = "Listing after the decision.", body = AdminBusinessDto),
        (status = 404, description = "Unknown listing.", body = ErrorResponse),
        (status = 409, description = "Listing already moderated.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn moderate_business(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(actor): AdminAuthenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ModerationRequest>,
) -> HttpResult<Json<AdminBusinessDto>> {
    let decision = ModerationDecision::parse(&payload.decision).into_http()?;

    state
        .services
        .moderation
        .moderate_business(&actor, ModerateBusinessCommand { id, decision })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/contact-messages",
    params(ContactListParams),
    responses(
        (status = 200, description = "Contact messages, newest first.", body = [ContactMessageDto]),
        (status = 401, description = "Missing or invalid admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_contact_messages(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(actor): AdminAuthenticated,
    Query(params): Query<ContactListParams>,
) -> HttpResult<Json<Vec<ContactMessageDto>>> {
    state
        .services
        .moderation
        .list_contact_messages(&actor, params.unread_only)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/contact-messages/{id}/read",
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message marked as read.", body = ContactMessageDto),
        (status = 404, description = "Unknown message.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn mark_contact_read(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(actor): AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContactMessageDto>> {
    state
        .services
        .moderation
        .mark_contact_read(&actor, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/newsletter",
    responses(
        (status = 200, description = "Newsletter subscribers.", body = [SubscriberDto]),
        (status = 401, description = "Missing or invalid admin token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_subscribers(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(actor): AdminAuthenticated,
) -> HttpResult<Json<Vec<SubscriberDto>>> {
    state
        .services
        .moderation
        .list_subscribers(&actor)
        .await
        .into_http()
        .map(Json)
}
