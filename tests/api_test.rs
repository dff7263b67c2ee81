//! Router-level tests: routes, envelopes, and error mapping.

mod common;

use axum::http::StatusCode;
use common::{get_json, request_from_origin, test_app, ScriptedUpstream, TEST_ORIGIN};
use serde_json::json;
use std::sync::Arc;

fn users() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874"
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        },
        {"id": 2, "name": "Ervin Howell"}
    ])
}

fn post(id: u64) -> serde_json::Value {
    json!({"id": id, "userId": 1, "title": "sunt aut facere", "body": "quia et suscipit"})
}

#[tokio::test]
async fn test_v2_customers_are_transformed() {
    let upstream = Arc::new(ScriptedUpstream::new().respond("/users", users()));
    let (app, _) = test_app(upstream, "/api");

    let (status, body) = get_json(&app, "/api/v2/customers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["name"], "Leanne Graham");
    assert_eq!(body["data"][0]["address"]["city"], "Gwenborough");
    assert_eq!(
        body["data"][0]["company"]["catchPhrase"],
        "Multi-layered client-server neural-net"
    );
    // Missing nested objects still come back as objects
    assert!(body["data"][1]["address"].is_object());
    assert!(body["data"][1]["company"].is_object());
}

#[tokio::test]
async fn test_v2_payment_by_id() {
    let upstream = Arc::new(ScriptedUpstream::new().respond("/posts/1", post(1)));
    let (app, _) = test_app(upstream, "/api");

    let (status, body) = get_json(&app, "/api/v2/payments/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["customerId"], 1);
    assert_eq!(body["data"]["currency"], "Naira");
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["description"], "sunt aut facere");
}

#[tokio::test]
async fn test_v2_reads_are_cached() {
    let upstream = Arc::new(ScriptedUpstream::new().respond("/posts/7", post(7)));
    let (app, cache) = test_app(upstream.clone(), "/api");

    let (_, first) = get_json(&app, "/api/v2/payments/7").await;
    let (_, second) = get_json(&app, "/api/v2/payments/7").await;

    assert_eq!(first, second);
    assert_eq!(upstream.calls("/posts/7"), 1);
    assert_eq!(cache.len(), 1);

    let (status, stats) = get_json(&app, "/api/cache/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["size"], 1);
    assert_eq!(stats["capacity"], 100);
    assert_eq!(stats["ttl_seconds"], 300);
    assert_eq!(stats["enabled"], true);
}

#[tokio::test]
async fn test_v1_passes_upstream_payload_through_uncached() {
    let upstream = Arc::new(ScriptedUpstream::new().respond("/users", users()));
    let (app, cache) = test_app(upstream.clone(), "/api");

    let (status, body) = get_json(&app, "/api/v1/customers").await;
    get_json(&app, "/api/v1/customers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], users());
    assert_eq!(upstream.calls("/users"), 2);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_upstream_failure_maps_to_503() {
    let upstream = Arc::new(ScriptedUpstream::new().fail("/users/3"));
    let (app, cache) = test_app(upstream, "/api");

    let (status, body) = get_json(&app, "/api/v2/customers/3").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({
            "success": false,
            "status": 503,
            "message": "Legacy system is temporarily unavailable. Please try again later.",
            "source": "legacy-api",
        })
    );
    assert!(!body.to_string().contains("ORA-00942"));
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_unknown_id_is_upstream_failure() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let (app, _) = test_app(upstream, "/api");

    let (status, body) = get_json(&app, "/api/v1/payments/999").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["source"], "legacy-api");
}

#[tokio::test]
async fn test_malformed_payload_maps_to_500() {
    let upstream = Arc::new(ScriptedUpstream::new().respond("/users", json!({"oops": true})));
    let (app, _) = test_app(upstream, "/api");

    let (status, body) = get_json(&app, "/api/v2/customers").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], 500);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch customers"));
    assert!(body.get("source").is_none());
}

#[tokio::test]
async fn test_invalid_id_is_rejected_before_upstream() {
    let upstream = Arc::new(ScriptedUpstream::new());
    let (app, _) = test_app(upstream.clone(), "/api");

    let (status, body) = get_json(&app, "/api/v2/customers/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "Invalid customer id: abc");
    assert_eq!(upstream.calls("/users/abc"), 0);
}

#[tokio::test]
async fn test_health_and_root() {
    let (app, _) = test_app(Arc::new(ScriptedUpstream::new()), "/api");

    let (status, health) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert!(health["uptime_secs"].is_u64());

    let (status, root) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(root["name"], "legacy-bridge");
    assert_eq!(root["health"], "/api/health");
    assert_eq!(root["api_versions"], json!(["v1", "v2"]));
}

#[tokio::test]
async fn test_custom_prefix() {
    let upstream = Arc::new(ScriptedUpstream::new().respond("/posts", json!([post(1), post(2)])));
    let (app, _) = test_app(upstream, "/bridge/");

    let (status, body) = get_json(&app, "/bridge/v2/payments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, _) = get_json(&app, "/api/v2/payments").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_prefix_mounts_routes_at_top_level() {
    let (app, _) = test_app(Arc::new(ScriptedUpstream::new()), "/");

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cors_allows_configured_origin_with_credentials() {
    let (app, _) = test_app(Arc::new(ScriptedUpstream::new()), "/api");

    let (status, headers) = request_from_origin(&app, "GET", "/api/health", TEST_ORIGIN).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        TEST_ORIGIN
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = test_app(Arc::new(ScriptedUpstream::new()), "/api");

    let (status, headers) =
        request_from_origin(&app, "OPTIONS", "/api/v2/customers", TEST_ORIGIN).await;

    assert!(status.is_success());
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        TEST_ORIGIN
    );
    assert!(headers.contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn test_cors_ignores_unlisted_origin() {
    let (app, _) = test_app(Arc::new(ScriptedUpstream::new()), "/api");

    let (status, headers) =
        request_from_origin(&app, "GET", "/api/health", "https://evil.example").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.get("access-control-allow-origin").is_none());
}
