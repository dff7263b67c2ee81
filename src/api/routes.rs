use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::handlers;
use crate::adapters::cache::ResourceCache;
use crate::domain::ports::UpstreamClient;
use crate::services::{CustomerService, PaymentService};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService>,
    pub payments: Arc<PaymentService>,
    pub upstream: Arc<dyn UpstreamClient>,
    pub cache: Arc<ResourceCache>,
    api_prefix: Arc<str>,
    started_at: Instant,
}

impl AppState {
    /// Wire both services over one cache and one upstream client.
    pub fn new(
        cache: Arc<ResourceCache>,
        upstream: Arc<dyn UpstreamClient>,
        api_prefix: &str,
    ) -> Self {
        Self {
            customers: Arc::new(CustomerService::new(cache.clone(), upstream.clone())),
            payments: Arc::new(PaymentService::new(cache.clone(), upstream.clone())),
            upstream,
            cache,
            api_prefix: Arc::from(api_prefix.trim_end_matches('/')),
            started_at: Instant::now(),
        }
    }

    /// Prefix without a trailing slash; empty when routes are mounted at `/`.
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("api_prefix", &self.api_prefix)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/customers", get(handlers::raw_customers))
        .route("/v1/customers/:id", get(handlers::raw_customer))
        .route("/v1/payments", get(handlers::raw_payments))
        .route("/v1/payments/:id", get(handlers::raw_payment))
        .route("/v2/customers", get(handlers::list_customers))
        .route("/v2/customers/:id", get(handlers::get_customer))
        .route("/v2/payments", get(handlers::list_payments))
        .route("/v2/payments/:id", get(handlers::get_payment))
        .route("/health", get(handlers::health))
        .route("/cache/stats", get(handlers::cache_stats))
}

/// Credentialed CORS for the listed browser origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_credentials(true)
}

/// Build the application router.
///
/// `cors_origins` lists the browser origins allowed to call the API.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    let root = Router::new().route("/", get(handlers::root));

    let app = if state.api_prefix().is_empty() {
        root.merge(api_routes())
    } else {
        root.nest(state.api_prefix(), api_routes())
    };

    app.layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
