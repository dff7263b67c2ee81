use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, warn};

use crate::domain::models::RetryConfig;
use crate::domain::ports::Clock;

/// Bounded-attempt policy with a constant delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Create a new retry policy
    ///
    /// # Arguments
    /// * `max_attempts` - Total attempts including the first; 1 disables retries
    /// * `delay` - Wait between a failed attempt and the next one
    ///
    /// # Panics
    /// Panics when `max_attempts` is 0. Configuration validation rejects that
    /// value before a policy is ever built from it.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        assert!(max_attempts > 0, "max_attempts must be greater than 0");
        Self {
            max_attempts,
            delay,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_millis(config.delay_ms))
    }

    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

/// Re-invokes a fallible async operation according to a [`RetryPolicy`].
///
/// Every failure is retried; there is no retryable/permanent split. Delays go
/// through the injected [`Clock`].
#[derive(Clone)]
pub struct RetryExecutor {
    clock: Arc<dyn Clock>,
}

impl RetryExecutor {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Run `operation` until it succeeds or `policy.max_attempts()` is reached.
    ///
    /// Returns the first success immediately. After exhaustion, returns the
    /// error of the last attempt.
    ///
    /// # Example
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use std::time::Duration;
    /// # use legacy_bridge::infrastructure::clock::SystemClock;
    /// # use legacy_bridge::infrastructure::legacy::{RetryExecutor, RetryPolicy};
    /// # async fn example() -> Result<u32, String> {
    /// let executor = RetryExecutor::new(Arc::new(SystemClock));
    /// let policy = RetryPolicy::new(3, Duration::from_millis(100));
    ///
    /// let value = executor
    ///     .execute(&policy, || async { Ok::<_, String>(42) })
    ///     .await?;
    /// # Ok(value)
    /// # }
    /// ```
    pub async fn execute<F, Fut, T, E>(
        &self,
        policy: &RetryPolicy,
        mut operation: F,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < policy.max_attempts => {
                    warn!(
                        attempt,
                        max_attempts = policy.max_attempts,
                        delay_ms = u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "retry attempt failed, retrying"
                    );
                    self.clock.sleep(policy.delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(
                        max_attempts = policy.max_attempts,
                        error = %err,
                        "all retry attempts failed"
                    );
                    return Err(err);
                }
            }
        }
    }
}

impl std::fmt::Debug for RetryExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryExecutor").finish_non_exhaustive()
    }
}
