use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, error};

use crate::adapters::cache::ResourceCache;
use crate::domain::errors::{BridgeResult, ServiceError, UpstreamError};
use crate::domain::models::{CacheKey, Cacheable};

/// Serve `key` from the cache, or fetch, decode, transform and store it.
///
/// Upstream failures propagate unchanged. Anything else that goes wrong is
/// reported through `failure`. The cache is written only after the whole
/// chain succeeded.
pub(super) async fn read_through<T, W, F, Fut, M, E>(
    cache: &ResourceCache,
    key: CacheKey,
    fetch: F,
    transform: M,
    failure: E,
) -> BridgeResult<T>
where
    T: Cacheable,
    W: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Value, UpstreamError>>,
    M: FnOnce(W) -> T,
    E: Fn(String) -> ServiceError,
{
    let rendered = key.to_string();

    if let Some(cached) = cache.get(&rendered) {
        let variant = cached.variant_name();
        return match T::from_cached(cached) {
            Some(value) => {
                debug!(key = %rendered, "cache hit");
                Ok(value)
            }
            None => {
                let err = failure(format!("cache entry holds unexpected {variant} payload"));
                error!(key = %rendered, error = %err, "cache entry has wrong shape");
                Err(err.into())
            }
        };
    }

    debug!(key = %rendered, "cache miss, fetching from legacy API");
    let raw = fetch().await?;

    let wire: W = serde_json::from_value(raw).map_err(|err| {
        let err = failure(format!("unexpected upstream payload: {err}"));
        error!(key = %rendered, error = %err, "failed to decode upstream payload");
        err
    })?;

    let value = transform(wire);
    cache.set(rendered, value.clone().into_cached());
    Ok(value)
}
