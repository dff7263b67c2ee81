//! Customer reads backed by the legacy `/users` resource.

use std::sync::Arc;
use tracing::instrument;

use super::cache_aside::read_through;
use crate::adapters::cache::ResourceCache;
use crate::domain::errors::{BridgeResult, ServiceError};
use crate::domain::models::{CacheKey, Customer, LegacyList, LegacyUser, ResourceKind};
use crate::domain::ports::UpstreamClient;
use crate::domain::transformers::to_customer;

const KIND: ResourceKind = ResourceKind::Customers;

pub struct CustomerService {
    cache: Arc<ResourceCache>,
    upstream: Arc<dyn UpstreamClient>,
}

impl CustomerService {
    pub fn new(cache: Arc<ResourceCache>, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { cache, upstream }
    }

    /// Every customer, in upstream order.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> BridgeResult<Vec<Customer>> {
        read_through(
            &self.cache,
            CacheKey::all(KIND),
            || self.upstream.fetch_collection(KIND),
            |users: LegacyList<LegacyUser>| users.0.iter().map(to_customer).collect(),
            |detail| ServiceError::collection("fetch customers", detail),
        )
        .await
    }

    /// A single customer. An unknown id is whatever the upstream says it is,
    /// normally a 404 surfacing as an upstream failure.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: u64) -> BridgeResult<Customer> {
        read_through(
            &self.cache,
            CacheKey::by_id(KIND, id),
            || self.upstream.fetch_by_id(KIND, id),
            |user: LegacyUser| to_customer(&user),
            |detail| ServiceError::for_id("fetch customer", id, detail),
        )
        .await
    }
}

impl std::fmt::Debug for CustomerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerService").finish_non_exhaustive()
    }
}
