//! Legacy Bridge - resilience layer in front of a legacy API
//!
//! Reads from an unreliable upstream go through a fixed-delay retry
//! executor, are reshaped into stable internal records, and are kept in a
//! bounded TTL cache so repeated reads stay off the upstream.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): records, wire shapes, errors, transformers and ports
//! - **Adapters** (`adapters`): the shared TTL cache and its expiry sweeper
//! - **Service Layer** (`services`): cache-aside reads per resource kind
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, retry, clock, config, logging
//! - **API Layer** (`api`): axum routes and error-to-response mapping
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use legacy_bridge::{
//!     Clock, Config, CustomerService, LegacyHttpClient, ResourceCache, RetryPolicy, SystemClock,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//! let clock: Arc<dyn Clock> = Arc::new(SystemClock);
//! let cache = Arc::new(ResourceCache::new(&config.cache, clock.clone()));
//! let upstream = Arc::new(LegacyHttpClient::new(
//!     &config.legacy_api,
//!     RetryPolicy::from_config(&config.retry),
//!     clock,
//! )?);
//!
//! let customers = CustomerService::new(cache, upstream);
//! let customer = customers.get_by_id(1).await?;
//! println!("{:?}", customer.name);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::{CacheStats, ResourceCache, TtlCache};
pub use domain::errors::{BridgeError, BridgeResult, ServiceError, UpstreamCause, UpstreamError};
pub use domain::models::{
    CacheConfig, CacheKey, Config, Customer, LegacyApiConfig, Payment, PaymentStatus,
    ResourceKind, RetryConfig,
};
pub use domain::ports::{Clock, UpstreamClient};
pub use infrastructure::clock::{ManualClock, SystemClock};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::legacy::{LegacyHttpClient, RetryExecutor, RetryPolicy};
pub use infrastructure::logging::LoggerImpl;
pub use services::{CustomerService, PaymentService};
