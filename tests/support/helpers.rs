// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, RecordingNotifier};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use ro_directory::application::{
    ports::{
        notification::Notifier, rate_limit::RateLimiter, security::AdminAuthenticator,
        time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use ro_directory::domain::business::BusinessRepository;
use ro_directory::infrastructure::{
    rate_limit::SlidingWindowRateLimiter,
    repositories::{
        InMemoryBusinessRepository, InMemoryContactMessageRepository,
        InMemoryNewsletterRepository,
    },
    security::StaticTokenAuthenticator,
    util::DefaultSlugGenerator,
};
use ro_directory::presentation::http::{
    extractors::ClientIpSource, routes::build_router, state::HttpState,
};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub const ADMIN_TOKEN: &str = "test-admin-token-0123456789";

pub fn build_services(notifier: Arc<dyn Notifier>) -> Arc<ApplicationServices> {
    build_services_with_business_repo(notifier, Arc::new(InMemoryBusinessRepository::new()))
}

pub fn build_services_with_business_repo(
    notifier: Arc<dyn Notifier>,
    business_repo: Arc<dyn BusinessRepository>,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let rate_limiter: Arc<dyn RateLimiter> =
        Arc::new(SlidingWindowRateLimiter::new(Arc::clone(&clock)));
    let admin: Arc<dyn AdminAuthenticator> = Arc::new(StaticTokenAuthenticator::new(
        Some(ADMIN_TOKEN.to_string()),
        Arc::clone(&clock),
    ));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        business_repo,
        Arc::new(InMemoryContactMessageRepository::new()),
        Arc::new(InMemoryNewsletterRepository::new()),
        notifier,
        rate_limiter,
        admin,
        clock,
        slugger,
    ))
}

pub struct TestApp {
    pub router: axum::Router,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn make_test_app() -> TestApp {
    let notifier = Arc::new(RecordingNotifier::default());
    let services = build_services(notifier.clone());
    TestApp {
        router: build_router(
            HttpState {
                services,
                client_ip_source: ClientIpSource::default(),
            },
            &[],
        ),
        notifier,
    }
}

pub fn make_test_router_with_notifier(notifier: Arc<dyn Notifier>) -> axum::Router {
    build_router(
        HttpState {
            services: build_services(notifier),
            client_ip_source: ClientIpSource::default(),
        },
        &[],
    )
}

pub fn make_test_router_with_ip_source(client_ip_source: ClientIpSource) -> axum::Router {
    build_router(
        HttpState {
            services: build_services(Arc::new(RecordingNotifier::default())),
            client_ip_source,
        },
        &[],
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "203.0.113.10")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn post_json_from(uri: &str, payload: &Value, client_ip: &str) -> Request<Body> {
    let mut request = post_json(uri, payload);
    request
        .headers_mut()
        .insert("x-forwarded-for", client_ip.parse().unwrap());
    request
}

pub fn with_admin(mut request: Request<Body>) -> Request<Body> {
    request.headers_mut().insert(
        AUTHORIZATION,
        format!("Bearer {ADMIN_TOKEN}").parse().unwrap(),
    );
    request
}

pub async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub fn assert_error_body(status: StatusCode, body: &Value, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {body}");
    assert_eq!(body["error"].as_str().unwrap_or(""), expected_error);
    assert!(
        !body["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}

/// Submit a listing and approve it through the admin API; returns its slug.
pub async fn submit_and_approve(router: &axum::Router, payload: &Value, client_ip: &str) -> String {
    let (status, receipt) = send(router, post_json_from("/api/v1/businesses", payload, client_ip)).await;
    assert_eq!(status, StatusCode::CREATED, "submission failed: {receipt}");
    let id = receipt["id"].as_i64().unwrap();

    let (status, moderated) = send(
        router,
        with_admin(post_json(
            &format!("/api/v1/admin/businesses/{id}/moderation"),
            &serde_json::json!({ "decision": "approve" }),
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "moderation failed: {moderated}");
    receipt["slug"].as_str().unwrap().to_string()
}
