//! In-memory upstream and cache fixtures for service tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapters::cache::ResourceCache;
use crate::domain::errors::{UpstreamCause, UpstreamError};
use crate::domain::ports::UpstreamClient;
use crate::infrastructure::clock::ManualClock;

/// Scripted upstream: each endpoint either answers with a fixed body or fails.
#[derive(Default)]
pub struct FakeUpstream {
    responses: HashMap<String, Option<Value>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ok(mut self, endpoint: &str, body: Value) -> Self {
        self.responses.insert(endpoint.to_string(), Some(body));
        self
    }

    pub fn with_failure(mut self, endpoint: &str) -> Self {
        self.responses.insert(endpoint.to_string(), None);
        self
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls.lock().unwrap().get(endpoint).copied().unwrap_or(0)
    }
}

#[async_trait]
impl UpstreamClient for FakeUpstream {
    async fn fetch_resource(&self, endpoint: &str) -> Result<Value, UpstreamError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default() += 1;

        match self.responses.get(endpoint) {
            Some(Some(body)) => Ok(body.clone()),
            Some(None) => Err(UpstreamError::new(
                endpoint,
                UpstreamCause::Status {
                    status: 500,
                    body: "Internal Server Error".to_string(),
                },
            )),
            None => Err(UpstreamError::new(
                endpoint,
                UpstreamCause::Status {
                    status: 404,
                    body: "{}".to_string(),
                },
            )),
        }
    }
}

pub const TEST_TTL: Duration = Duration::from_secs(300);

pub fn cache() -> Arc<ResourceCache> {
    cache_on(Arc::new(ManualClock::new()), true)
}

/// Cache driven by `clock`, optionally disabled.
pub fn cache_on(clock: Arc<ManualClock>, enabled: bool) -> Arc<ResourceCache> {
    Arc::new(ResourceCache::with_settings(100, TEST_TTL, enabled, clock))
}
