use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

use super::ttl_cache::TtlCache;

/// Periodically drop expired entries so idle keys do not hold memory.
///
/// The task runs until the handle is aborted or the runtime shuts down.
pub fn spawn_expiry_sweeper<V>(cache: Arc<TtlCache<V>>, every: Duration) -> JoinHandle<()>
where
    V: Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = cache.purge_expired();
            if removed > 0 {
                info!(removed, "cache cleanup removed expired entries");
            }
        }
    })
}
