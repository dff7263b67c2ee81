//! In-memory caching layer for upstream reads.
//!
//! A bounded, time-expiring store with FIFO eviction, plus a background
//! task that sweeps expired entries on an interval.

pub mod sweeper;
pub mod ttl_cache;

pub use sweeper::spawn_expiry_sweeper;
pub use ttl_cache::{CacheStats, TtlCache};

use crate::domain::models::CachedResource;

/// The cache shared by every resource service.
pub type ResourceCache = TtlCache<CachedResource>;
