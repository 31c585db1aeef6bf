// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! End-to-end proxy contract: axum router -> reqwest client -> mockito backend.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use mockito::Matcher;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use url::Url;

use toolkit_core::application::ProxyService;
use toolkit_core::infrastructure::HttpBackendClient;
use toolkit_core::presentation::api::app;

fn router_for(base_url: &str) -> Router {
    let backend = HttpBackendClient::new(Url::parse(base_url).unwrap());
    app(ProxyService::new(Arc::new(backend)))
}

async fn call(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_get_tenant_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tenant/T1")
        .match_header("authorization", "Bearer K1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tenant_id":"T1","name":"Acme"}"#)
        .expect(1)
        .create_async()
        .await;

    let (status, body) = call(
        router_for(&server.url()),
        "GET",
        "/api/tenant?tenantId=T1&apiKey=K1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tenant_id": "T1", "name": "Acme"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_worker_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/tenant/T1/worker")
        .match_header("authorization", "Bearer K1")
        .match_body(Matcher::Json(json!({
            "name": "W",
            "description": "D",
            "output_type": "TEXT",
            "prompt": "P"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"worker_id":"W1","name":"W","output_type":"TEXT"}"#)
        .expect(1)
        .create_async()
        .await;

    let (status, body) = call(
        router_for(&server.url()),
        "POST",
        "/api/worker/create",
        Some(json!({
            "tenantId": "T1",
            "apiKey": "K1",
            "name": "W",
            "description": "D",
            "output_type": "TEXT",
            "prompt": "P"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"worker_id": "W1", "name": "W", "output_type": "TEXT"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_parameters_never_reach_backend() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for method in ["GET", "POST", "PUT", "DELETE"] {
        let mock = server
            .mock(method, Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .expect(0)
            .create_async()
            .await;
        mocks.push(mock);
    }

    let cases = [
        ("GET", "/api/tenant?tenantId=T1", None),
        ("GET", "/api/brand?tenantId=T1&apiKey=K1", None),
        ("GET", "/api/source/list?tenantId=T1&brandId=&apiKey=K1", None),
        ("GET", "/api/generation?tenantId=T1&brandId=B1&workerId=W1&apiKey=K1", None),
        ("DELETE", "/api/worker/delete?tenantId=T1&apiKey=K1", None),
        (
            "POST",
            "/api/worker/create",
            Some(json!({"tenantId": "T1", "apiKey": "K1", "name": "W", "description": "D", "prompt": "P"})),
        ),
        (
            "PUT",
            "/api/worker/update",
            Some(json!({"tenantId": "T1", "workerId": "W1", "apiKey": "K1", "name": "W", "prompt": "P"})),
        ),
        ("POST", "/api/brand-compass/trigger", Some(json!({"tenantId": "T1", "apiKey": "K1"}))),
    ];

    for (method, uri, body) in cases {
        let (status, envelope) = call(router_for(&server.url()), method, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(envelope, json!({"error": "Missing required parameters"}));
    }

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_malformed_body_is_missing_parameters() {
    let router = router_for("http://127.0.0.1:1");
    let request = Request::builder()
        .method("POST")
        .uri("/api/generation/create")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_backend_rejection_collapses_to_fixed_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/tenant/T1/worker/W1")
        .with_status(404)
        .with_body(r#"{"detail":"worker not found"}"#)
        .create_async()
        .await;

    let (status, body) = call(
        router_for(&server.url()),
        "GET",
        "/api/worker?tenantId=T1&workerId=W1&apiKey=K1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch worker data"}));
}

#[tokio::test]
async fn test_unreachable_backend_collapses_to_fixed_message() {
    let (status, body) = call(
        router_for("http://127.0.0.1:1"),
        "GET",
        "/api/brand-compass/status?tenantId=T1&brandId=B1&apiKey=K1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch brand compass status"}));
}

#[tokio::test]
async fn test_update_worker_never_sends_output_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/tenant/T1/worker/W1")
        .match_body(Matcher::Json(json!({
            "name": "W2",
            "description": "D2",
            "prompt": "P2"
        })))
        .with_status(200)
        .with_body(r#"{"worker_id":"W1","name":"W2"}"#)
        .expect(1)
        .create_async()
        .await;

    let (status, body) = call(
        router_for(&server.url()),
        "PUT",
        "/api/worker/update",
        Some(json!({
            "tenantId": "T1",
            "workerId": "W1",
            "apiKey": "K1",
            "name": "W2",
            "description": "D2",
            "prompt": "P2",
            "output_type": "IMAGE"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"worker_id": "W1", "name": "W2"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_worker_returns_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/tenant/T1/worker/W1")
        .match_header("authorization", "Bearer K1")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let (status, body) = call(
        router_for(&server.url()),
        "DELETE",
        "/api/worker/delete?tenantId=T1&workerId=W1&apiKey=K1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generation_create_nests_path_and_forwards_context() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/tenant/T1/brand/B1/worker/W1/generation")
        .match_header("authorization", "Bearer K1")
        .match_body(Matcher::Json(json!({"context": "spring launch"})))
        .with_status(202)
        .with_body(r#"{"generation_id":"G1","status":"PENDING"}"#)
        .expect(1)
        .create_async()
        .await;

    let (status, body) = call(
        router_for(&server.url()),
        "POST",
        "/api/generation/create",
        Some(json!({
            "tenantId": "T1",
            "brandId": "B1",
            "workerId": "W1",
            "apiKey": "K1",
            "context": "spring launch"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generation_id"], "G1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_compass_trigger_uses_caller_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/tenant/T1/brand/B1/compass/trigger")
        .match_header("authorization", "Bearer operator-key")
        .with_status(200)
        .with_body(r#"{"status":"PROCESSING"}"#)
        .expect(1)
        .create_async()
        .await;

    let (status, body) = call(
        router_for(&server.url()),
        "POST",
        "/api/brand-compass/trigger",
        Some(json!({"tenantId": "T1", "brandId": "B1", "apiKey": "operator-key"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "PROCESSING"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_endpoints_relay_arrays() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/tenant/T1/brand/B1/source")
        .with_status(200)
        .with_body(r#"[{"source_id":"S1"},{"source_id":"S2"}]"#)
        .create_async()
        .await;

    let (status, body) = call(
        router_for(&server.url()),
        "GET",
        "/api/source/list?tenantId=T1&brandId=B1&apiKey=K1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"source_id": "S1"}, {"source_id": "S2"}]));
}

#[tokio::test]
async fn test_health_and_unknown_routes_are_json() {
    let (status, body) = call(router_for("http://127.0.0.1:1"), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = call(router_for("http://127.0.0.1:1"), "GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}
