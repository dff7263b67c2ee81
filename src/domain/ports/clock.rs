use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Source of the current instant and of delays.
///
/// The cache reads `now` to stamp and check expiry; the retry executor
/// awaits `sleep` between attempts.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    async fn sleep(&self, duration: Duration);
}
