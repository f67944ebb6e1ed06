// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::directory::list_categories,
        crate::presentation::http::controllers::directory::get_category,
        crate::presentation::http::controllers::directory::list_category_businesses,
        crate::presentation::http::controllers::directory::get_business,
        crate::presentation::http::controllers::submissions::submit_contact,
        crate::presentation::http::controllers::submissions::submit_business,
        crate::presentation::http::controllers::submissions::subscribe_newsletter,
        crate::presentation::http::controllers::admin::list_businesses,
        crate::presentation::http::controllers::admin::moderate_business,
        crate::presentation::http::controllers::admin::list_contact_messages,
        crate::presentation::http::controllers::admin::mark_contact_read,
        crate::presentation::http::controllers::admin::list_subscribers,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::submissions::ContactRequest,
            crate::presentation::http::controllers::submissions::BusinessRequest,
            crate::presentation::http::controllers::submissions::NewsletterRequest,
            crate::presentation::http::controllers::admin::ModerationRequest,
            crate::application::dto::CategoryDto,
            crate::application::dto::BusinessDto,
            crate::application::dto::AdminBusinessDto,
            crate::application::dto::BusinessSubmissionDto,
            crate::application::dto::ContactMessageDto,
            crate::application::dto::ContactReceiptDto,
            crate::application::dto::SubscriptionDto,
            crate::application::dto::SubscriberDto
        )
    ),
    tags(
        (name = "Directory", description = "Categories and approved listings"),
        (name = "Submissions", description = "Rate-limited public submissions"),
        (name = "Admin", description = "Moderation endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Romanian Business Directory API",
        description = "Category browsing, listing submissions and moderation",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        servers.push(Server::new(url));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
