//! Payment reads backed by the legacy `/posts` resource.

use std::sync::Arc;
use tracing::instrument;

use super::cache_aside::read_through;
use crate::adapters::cache::ResourceCache;
use crate::domain::errors::{BridgeResult, ServiceError};
use crate::domain::models::{CacheKey, LegacyList, LegacyPost, Payment, ResourceKind};
use crate::domain::ports::UpstreamClient;
use crate::domain::transformers::to_payment;

const KIND: ResourceKind = ResourceKind::Payments;

pub struct PaymentService {
    cache: Arc<ResourceCache>,
    upstream: Arc<dyn UpstreamClient>,
}

impl PaymentService {
    pub fn new(cache: Arc<ResourceCache>, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { cache, upstream }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> BridgeResult<Vec<Payment>> {
        read_through(
            &self.cache,
            CacheKey::all(KIND),
            || self.upstream.fetch_collection(KIND),
            |posts: LegacyList<LegacyPost>| posts.0.iter().map(to_payment).collect(),
            |detail| ServiceError::collection("fetch payments", detail),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: u64) -> BridgeResult<Payment> {
        read_through(
            &self.cache,
            CacheKey::by_id(KIND, id),
            || self.upstream.fetch_by_id(KIND, id),
            |post: LegacyPost| to_payment(&post),
            |detail| ServiceError::for_id("fetch payment", id, detail),
        )
        .await
    }
}

impl std::fmt::Debug for PaymentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentService").finish_non_exhaustive()
    }
}
