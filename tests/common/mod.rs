//! Common test utilities for integration tests
//!
//! Provides a scripted upstream and router helpers shared across the
//! integration test files.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use legacy_bridge::api::{router, AppState};
use legacy_bridge::{ManualClock, ResourceCache, UpstreamCause, UpstreamClient, UpstreamError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Upstream double: fixed bodies per endpoint, 500 for endpoints marked
/// failing, 404 for anything unknown. Counts every call.
#[derive(Default)]
pub struct ScriptedUpstream {
    bodies: HashMap<String, Value>,
    failing: Vec<String>,
    calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, endpoint: &str, body: Value) -> Self {
        self.bodies.insert(endpoint.to_string(), body);
        self
    }

    pub fn fail(mut self, endpoint: &str) -> Self {
        self.failing.push(endpoint.to_string());
        self
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls.lock().unwrap().get(endpoint).copied().unwrap_or(0)
    }
}

#[async_trait]
impl UpstreamClient for ScriptedUpstream {
    async fn fetch_resource(&self, endpoint: &str) -> Result<Value, UpstreamError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default() += 1;

        if self.failing.iter().any(|e| e == endpoint) {
            return Err(UpstreamError::new(
                endpoint,
                UpstreamCause::Status {
                    status: 500,
                    body: "ORA-00942: table or view does not exist".to_string(),
                },
            ));
        }

        self.bodies.get(endpoint).cloned().ok_or_else(|| {
            UpstreamError::new(
                endpoint,
                UpstreamCause::Status {
                    status: 404,
                    body: "{}".to_string(),
                },
            )
        })
    }
}

/// Enabled cache on a manual clock.
pub fn test_cache() -> Arc<ResourceCache> {
    Arc::new(ResourceCache::with_settings(
        100,
        Duration::from_secs(300),
        true,
        Arc::new(ManualClock::new()),
    ))
}

/// Origin allowed by every test router.
pub const TEST_ORIGIN: &str = "http://localhost:5173";

pub fn test_app(upstream: Arc<ScriptedUpstream>, prefix: &str) -> (Router, Arc<ResourceCache>) {
    let cache = test_cache();
    let state = AppState::new(cache.clone(), upstream, prefix);
    (router(state, &[TEST_ORIGIN.to_string()]), cache)
}

/// Issue a request with the given method and `Origin`, returning status and headers.
pub async fn request_from_origin(
    app: &Router,
    method: &str,
    uri: &str,
    origin: &str,
) -> (StatusCode, HeaderMap) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("origin", origin)
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    (response.status(), response.headers().clone())
}

/// Issue a GET and decode the JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
