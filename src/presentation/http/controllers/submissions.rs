// src/presentation/http/controllers/submissions.rs
use crate::application::{
    commands::submissions::{
        SubmitBusinessCommand, SubmitContactCommand, SubscribeNewsletterCommand,
    },
    dto::{BusinessSubmissionDto, ContactReceiptDto, SubscriptionDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ClientKey;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BusinessRequest {
    pub name: String,
    pub category: String,
    pub description: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Language codes: `ro`, `en`, `es`.
    #[serde(default)]
    pub languages: Vec<String>,
    pub owner_email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewsletterRequest {
    pub email: String,
    #[serde(default)]
    pub locale: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored.", body = ContactReceiptDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 429, description = "Too many submissions.", body = ErrorResponse)
    ),
    tag = "Submissions"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    ClientKey(client): ClientKey,
    Json(payload): Json<ContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactReceiptDto>)> {
    let command = SubmitContactCommand {
        name: payload.name,
        email: payload.email,
        subject: payload.subject,
        message: payload.message,
    };

    state
        .services
        .submissions
        .submit_contact(&client, command)
        .await
        .into_http()
        .map(|receipt| (StatusCode::CREATED, Json(receipt)))
}

#[utoipa::path(
    post,
    path = "/api/v1/businesses",
    request_body = BusinessRequest,
    responses(
        (status = 201, description = "Listing stored for review.", body = BusinessSubmissionDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 429, description = "Too many submissions.", body = ErrorResponse)
    ),
    tag = "Submissions"
)]
pub async fn submit_business(
    Extension(state): Extension<HttpState>,
    ClientKey(client): ClientKey,
    Json(payload): Json<BusinessRequest>,
) -> HttpResult<(StatusCode, Json<BusinessSubmissionDto>)> {
    let command = SubmitBusinessCommand {
        name: payload.name,
        category: payload.category,
        description: payload.description,
        city: payload.city,
        address: payload.address,
        phone: payload.phone,
        email: payload.email,
        website: payload.website,
        languages: payload.languages,
        owner_email: payload.owner_email,
    };

    state
        .services
        .submissions
        .submit_business(&client, command)
        .await
        .into_http()
        .map(|receipt| (StatusCode::CREATED, Json(receipt)))
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletter",
    request_body = NewsletterRequest,
    responses(
        (status = 200, description = "Subscribed, or already subscribed.", body = SubscriptionDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 429, description = "Too many submissions.", body = ErrorResponse)
    ),
    tag = "Submissions"
)]
pub async fn subscribe_newsletter(
    Extension(state): Extension<HttpState>,
    ClientKey(client): ClientKey,
    Json(payload): Json<NewsletterRequest>,
) -> HttpResult<Json<SubscriptionDto>> {
    let command = SubscribeNewsletterCommand {
        email: payload.email,
        locale: payload.locale,
    };

    state
        .services
        .submissions
        .subscribe_newsletter(&client, command)
        .await
        .into_http()
        .map(Json)
}
