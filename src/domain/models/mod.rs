//! Domain models
//!
//! - `legacy`: upstream wire shapes, decoded leniently
//! - `customer` / `payment`: internal records handed to callers
//! - `cache_key`: deterministic, collision-free cache keys
//! - `cached`: the payload stored in the TTL cache
//! - `config`: application configuration

pub mod cache_key;
pub mod cached;
pub mod config;
pub mod customer;
pub mod legacy;
pub mod payment;

pub use cache_key::{CacheKey, KeyScope, ResourceKind};
pub use cached::{CachedResource, Cacheable};
pub use config::{
    CacheConfig, Config, LegacyApiConfig, LogFormat, LoggingConfig, RetryConfig, RotationPolicy,
    ServerConfig,
};
pub use customer::{Customer, CustomerAddress, CustomerCompany};
pub use legacy::{LegacyAddress, LegacyCompany, LegacyList, LegacyPost, LegacyUser};
pub use payment::{Payment, PaymentStatus};
