use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::UpstreamError;
use crate::domain::models::ResourceKind;

/// Read-only access to the legacy API.
///
/// Implementations return the response body unexamined and report every
/// failure as an [`UpstreamError`].
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Read the raw payload at `endpoint` (a path relative to the base URL).
    async fn fetch_resource(&self, endpoint: &str) -> Result<Value, UpstreamError>;

    /// Read the whole collection for `kind`.
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Value, UpstreamError> {
        self.fetch_resource(kind.collection_path()).await
    }

    /// Read a single record of `kind`.
    async fn fetch_by_id(&self, kind: ResourceKind, id: u64) -> Result<Value, UpstreamError> {
        self.fetch_resource(&kind.item_path(id)).await
    }
}
