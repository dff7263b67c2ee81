//! Error kinds that escape the fetch-cache-retry-transform core.
//!
//! Exactly two kinds reach callers: [`UpstreamError`] for anything that went
//! wrong talking to the legacy API, and [`ServiceError`] for defects in the
//! orchestration around it. They are mutually exclusive.

use thiserror::Error;

/// Underlying reason an upstream call failed.
///
/// Kept for logs and diagnostics only; callers see the same
/// [`UpstreamError`] regardless of which variant is inside.
#[derive(Debug, Error)]
pub enum UpstreamCause {
    /// Connection refused, DNS failure, reset, TLS error.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The per-attempt timeout elapsed.
    #[error("request timed out")]
    Timeout(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The upstream answered with a non-2xx status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be read as JSON.
    #[error("malformed payload: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Single failure signal for every upstream problem.
#[derive(Debug, Error)]
#[error("Legacy API Error ({endpoint}): {cause}")]
pub struct UpstreamError {
    endpoint: String,
    #[source]
    cause: UpstreamCause,
}

impl UpstreamError {
    /// Fixed, user-safe message rendered at the boundary.
    pub const USER_MESSAGE: &'static str =
        "Legacy system is temporarily unavailable. Please try again later.";

    /// Literal marker identifying the failure as upstream-originated.
    pub const SOURCE_MARKER: &'static str = "legacy-api";

    /// HTTP status the boundary always uses for this kind.
    pub const STATUS: u16 = 503;

    pub fn new(endpoint: impl Into<String>, cause: UpstreamCause) -> Self {
        Self {
            endpoint: endpoint.into(),
            cause,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub const fn cause(&self) -> &UpstreamCause {
        &self.cause
    }
}

/// Unexpected defect while orchestrating cache and transform.
#[derive(Debug, Error)]
#[error("{}: {detail}", describe(.operation, .resource_id))]
pub struct ServiceError {
    operation: String,
    resource_id: Option<u64>,
    detail: String,
}

fn describe(operation: &str, resource_id: &Option<u64>) -> String {
    match resource_id {
        Some(id) => format!("Failed to {operation} {id}"),
        None => format!("Failed to {operation}"),
    }
}

impl ServiceError {
    /// Failure of a collection-level operation, e.g. `"fetch customers"`.
    pub fn collection(operation: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self {
            operation: operation.into(),
            resource_id: None,
            detail: detail.to_string(),
        }
    }

    /// Failure of a by-identifier operation, e.g. `"fetch customer"` for id 7.
    pub fn for_id(
        operation: impl Into<String>,
        resource_id: u64,
        detail: impl std::fmt::Display,
    ) -> Self {
        Self {
            operation: operation.into(),
            resource_id: Some(resource_id),
            detail: detail.to_string(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub const fn resource_id(&self) -> Option<u64> {
        self.resource_id
    }
}

/// Everything a resource service can fail with.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl BridgeError {
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
