// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, directory, submissions},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// Full application router. An empty `allowed_origins` allows any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/categories", get(directory::list_categories))
        .route("/api/v1/categories/{slug}", get(directory::get_category))
        .route(
            "/api/v1/categories/{slug}/businesses",
            get(directory::list_category_businesses),
        )
        .route(
            "/api/v1/businesses",
            post(submissions::submit_business),
        )
        .route("/api/v1/businesses/{slug}", get(directory::get_business))
        .route("/api/v1/contact", post(submissions::submit_contact))
        .route("/api/v1/newsletter", post(submissions::subscribe_newsletter))
        .route("/api/v1/admin/businesses", get(admin::list_businesses))
        .route(
            "/api/v1/admin/businesses/{id}/moderation",
            post(admin::moderate_business),
        )
        .route(
            "/api/v1/admin/contact-messages",
            get(admin::list_contact_messages),
        )
        .route(
            "/api/v1/admin/contact-messages/{id}/read",
            post(admin::mark_contact_read),
        )
        .route("/api/v1/admin/newsletter", get(admin::list_subscribers))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
