mod common;

use axum::http::{Method, StatusCode};
use beer_stock_api::services::BeerStockService;
use common::{response_json, TestApp};
use serde_json::{json, Value};

const BEERS: &str = "/api/v1/beers";

fn brahma() -> Value {
    json!({
        "name": "Brahma",
        "brand": "Ambev",
        "max": 50,
        "quantity": 10,
        "type": "LAGER"
    })
}

async fn create(app: &TestApp, body: Value) -> Value {
    let response = app.request(Method::POST, BEERS, Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test]
async fn beer_lifecycle_from_create_to_delete() {
    let app = TestApp::new().await;

    let created = create(&app, brahma()).await;
    let id = created["id"].as_i64().expect("id assigned");
    assert_eq!(created["name"], "Brahma");
    assert_eq!(created["brand"], "Ambev");
    assert_eq!(created["max"], 50);
    assert_eq!(created["quantity"], 10);
    assert_eq!(created["type"], "LAGER");

    let response = app.request(Method::GET, "/api/v1/beers/Brahma", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);

    let response = app
        .request(
            Method::PATCH,
            &format!("{BEERS}/{id}/increment"),
            Some(json!({"quantity": 10})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["quantity"], 20);

    let response = app
        .request(
            Method::PATCH,
            &format!("{BEERS}/{id}/decrement"),
            Some(json!({"quantity": 5})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["quantity"], 15);

    let response = app.request(Method::DELETE, &format!("{BEERS}/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.request(Method::GET, "/api/v1/beers/Brahma", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.request(Method::DELETE, &format!("{BEERS}/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_name_is_conflict() {
    let app = TestApp::new().await;
    create(&app, brahma()).await;

    let response = app.request(Method::POST, BEERS, Some(brahma())).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let beers = app.state.beer_service.list_all().await.unwrap();
    assert_eq!(beers.len(), 1);
}

#[tokio::test]
async fn create_ignores_supplied_id() {
    let app = TestApp::new().await;
    let mut body = brahma();
    body["id"] = json!(999);

    let created = create(&app, body).await;
    assert_ne!(created["id"], 999);
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let app = TestApp::new().await;

    let mut missing_brand = brahma();
    missing_brand.as_object_mut().unwrap().remove("brand");
    let mut over_capacity = brahma();
    over_capacity["max"] = json!(5);

    for body in [missing_brand, over_capacity] {
        let response = app.request(Method::POST, BEERS, Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = app.request(Method::GET, BEERS, None).await;
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn list_returns_beers_in_creation_order() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, BEERS, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));

    create(&app, brahma()).await;
    create(
        &app,
        json!({"name": "Colorado Indica", "brand": "Colorado", "max": 30, "quantity": 0, "type": "IPA"}),
    )
    .await;

    let response = app.request(Method::GET, BEERS, None).await;
    let body = response_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Brahma", "Colorado Indica"]);
}

#[tokio::test]
async fn stock_bounds_are_enforced_without_side_effects() {
    let app = TestApp::new().await;
    let id = create(&app, brahma()).await["id"].as_i64().unwrap();

    let response = app
        .request(
            Method::PATCH,
            &format!("{BEERS}/{id}/increment"),
            Some(json!({"quantity": 41})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request(
            Method::PATCH,
            &format!("{BEERS}/{id}/decrement"),
            Some(json!({"quantity": 11})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.request(Method::GET, "/api/v1/beers/Brahma", None).await;
    assert_eq!(response_json(response).await["quantity"], 10);

    let response = app
        .request(
            Method::PATCH,
            &format!("{BEERS}/{id}/increment"),
            Some(json!({"quantity": 40})),
        )
        .await;
    assert_eq!(response_json(response).await["quantity"], 50);
}

#[tokio::test]
async fn stock_changes_on_unknown_id_are_not_found() {
    let app = TestApp::new().await;

    for path in ["increment", "decrement"] {
        let response = app
            .request(
                Method::PATCH,
                &format!("{BEERS}/42/{path}"),
                Some(json!({"quantity": 1})),
            )
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn every_response_carries_request_id() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, BEERS, None).await;
    assert!(response.headers().contains_key("x-request-id"));

    let response = app
        .request_with_headers(
            Method::GET,
            "/api/v1/beers/Unknown",
            None,
            &[("x-request-id", "trace-me-123")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trace-me-123"
    );
    let body = response_json(response).await;
    assert_eq!(body["request_id"], "trace-me-123");
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn health_and_docs_are_served() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request(Method::GET, "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["ready"], true);

    let response = app.request(Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = response_json(response).await;
    assert!(doc["paths"].get("/api/v1/beers").is_some());
}
