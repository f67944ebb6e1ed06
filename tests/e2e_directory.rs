// tests/e2e_directory.rs
use axum::http::StatusCode;

mod support;

use support::*;

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = make_test_app();

    let (status, body) = send(&app.router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app.router, get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/v1/categories/{slug}"].is_object());
}

#[tokio::test]
async fn categories_are_listed_with_slugs() {
    let app = make_test_app();
    let (status, body) = send(&app.router, get("/api/v1/categories")).await;
    assert_eq!(status, StatusCode::OK);

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 14);
    assert!(items.iter().any(|c| c["name"] == "Beauty & Wellness" && c["slug"] == "beauty-wellness"));
    assert!(items.iter().any(|c| c["name"] == "IT & Marketing" && c["slug"] == "it-marketing"));
}

/// エイリアスと未知のスラッグの両方を解決できることを確認する
#[tokio::test]
async fn category_slugs_resolve_through_aliases_and_fallback() {
    let app = make_test_app();

    let (status, body) = send(&app.router, get("/api/v1/categories/car-service")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Car Services");

    let (_, body) = send(&app.router, get("/api/v1/categories/unknown-category-x")).await;
    assert_eq!(body["name"], "Unknown Category X");
    assert_eq!(body["slug"], "unknown-category-x");
}

#[tokio::test]
async fn pending_listing_is_hidden_until_approved() {
    let app = make_test_app();

    let (status, receipt) = send(
        &app.router,
        post_json("/api/v1/businesses", &business_payload("Auto Service Dacia", "Car Service")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["status"], "pending");
    assert_eq!(receipt["slug"], "auto-service-dacia");

    let (status, _) = send(&app.router, get("/api/v1/businesses/auto-service-dacia")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, listed) = send(&app.router, get("/api/v1/categories/car-services/businesses")).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);

    let id = receipt["id"].as_i64().unwrap();
    let (status, _) = send(
        &app.router,
        with_admin(post_json(
            &format!("/api/v1/admin/businesses/{id}/moderation"),
            &serde_json::json!({ "decision": "approve" }),
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = send(&app.router, get("/api/v1/categories/car-services/businesses")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["category_slug"], "car-service");
}

#[tokio::test]
async fn business_detail_renders_description() {
    let app = make_test_app();
    let slug = submit_and_approve(
        &app.router,
        &business_payload("Service Auto Carpați", "Car Services"),
        "198.51.100.1",
    )
    .await;
    assert_eq!(slug, "service-auto-carpati");

    let (status, body) = send(&app.router, get(&format!("/api/v1/businesses/{slug}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["description_html"],
        "<h2>Servicii</h2>\n<p>Reparații auto și ITP.<br>Programări zilnic.</p>\n<h3>Program</h3>\n<p>Luni-Vineri 9-18</p>"
    );
    assert_eq!(body["languages"], serde_json::json!(["ro", "es"]));
    assert!(body.get("owner_email").is_none());
}

#[tokio::test]
async fn category_listing_is_sorted_and_filtered() {
    let app = make_test_app();
    submit_and_approve(&app.router, &business_payload("Zorile Bakery", "Bakery"), "10.0.0.1").await;
    submit_and_approve(&app.router, &business_payload("Alimentara Ardeal", "Grocery"), "10.0.0.2").await;
    submit_and_approve(&app.router, &business_payload("Brutăria Moldova", "Bakery"), "10.0.0.3").await;

    let (_, body) = send(&app.router, get("/api/v1/categories/bakery/businesses")).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Brutăria Moldova", "Zorile Bakery"]);
}

/// "Beauty Salon" は beauty-salon では見つかるが beauty-wellness では見つからない
#[tokio::test]
async fn beauty_salon_category_keeps_existing_matching_behaviour() {
    let app = make_test_app();
    submit_and_approve(&app.router, &business_payload("Salon Ana", "Beauty Salon"), "10.0.1.1").await;

    let (_, own_slug) = send(&app.router, get("/api/v1/categories/beauty-salon/businesses")).await;
    assert_eq!(own_slug.as_array().unwrap().len(), 1);

    let (_, alias_slug) = send(&app.router, get("/api/v1/categories/beauty-wellness/businesses")).await;
    assert_eq!(alias_slug.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn duplicate_names_get_suffixed_slugs() {
    let app = make_test_app();
    let first = submit_and_approve(&app.router, &business_payload("Casa Română", "Restaurant & Food"), "10.0.2.1").await;
    let second = submit_and_approve(&app.router, &business_payload("Casa Română", "Restaurant & Food"), "10.0.2.2").await;
    assert_eq!(first, "casa-romana");
    assert_eq!(second, "casa-romana-1");

    let (_, listed) = send(&app.router, get("/api/v1/categories/restaurant/businesses")).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}
