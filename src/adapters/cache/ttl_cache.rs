//! Bounded TTL cache with oldest-insertion eviction.
//!
//! Expiry is lazy: an expired entry stays in memory until a read finds it,
//! [`TtlCache::purge_expired`] sweeps it, or eviction pushes it out. Eviction
//! is FIFO by first insertion, not LRU; reads never change the order.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::models::CacheConfig;
use crate::domain::ports::Clock;

/// Snapshot of cache state for operational visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub ttl_seconds: u64,
    pub enabled: bool,
}

struct CacheEntry<V> {
    value: V,
    /// `None` when `now + ttl` is past the representable range.
    expires_at: Option<Instant>,
    /// Insertion sequence, kept across overwrites.
    seq: u64,
}

struct Store<V> {
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion sequence -> key, oldest first.
    order: BTreeMap<u64, String>,
    next_seq: u64,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now > at)
    }
}

impl<V> Store<V> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }

    fn remove(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.order.remove(&entry.seq);
        Some(entry)
    }

    fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.entries.remove(&key);
        Some(key)
    }

    fn insert_new(&mut self, key: String, value: V, expires_at: Option<Instant>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, key.clone());
        self.entries.insert(
            key,
            CacheEntry {
                value,
                expires_at,
                seq,
            },
        );
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// Bounded key/value store with per-entry expiry.
///
/// A disabled cache is transparent: `get` always misses and `set` is a
/// no-op, so callers never need to special-case it.
pub struct TtlCache<V> {
    capacity: usize,
    ttl: Duration,
    enabled: bool,
    clock: Arc<dyn Clock>,
    store: Mutex<Store<V>>,
}

impl<V> TtlCache<V> {
    /// Create a cache from configuration.
    pub fn new(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_settings(
            config.max_size,
            Duration::from_secs(config.ttl_seconds),
            config.enabled,
            clock,
        )
    }

    /// # Panics
    /// Panics when `capacity` is 0.
    pub fn with_settings(
        capacity: usize,
        ttl: Duration,
        enabled: bool,
        clock: Arc<dyn Clock>,
    ) -> Self {
        assert!(capacity > 0, "cache capacity must be greater than 0");
        Self {
            capacity,
            ttl,
            enabled,
            clock,
            store: Mutex::new(Store::new()),
        }
    }

    /// Look up `key`, dropping it first if it has expired.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        if !self.enabled {
            return None;
        }

        let now = self.clock.now();
        let mut store = self.store();

        let expired = store.entries.get(key)?.is_expired(now);
        if expired {
            store.remove(key);
            debug!(key, "cache entry expired");
            return None;
        }

        store.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store `value` under `key` for one TTL.
    ///
    /// A new key arriving at capacity evicts the oldest-inserted entry first.
    /// Overwriting an existing key never evicts and keeps its place in the
    /// eviction order.
    pub fn set(&self, key: impl Into<String>, value: V) {
        if !self.enabled {
            return;
        }

        let key = key.into();
        // A TTL too large to add to the clock never expires
        let expires_at = self.clock.now().checked_add(self.ttl);
        let mut store = self.store();

        if let Some(existing) = store.entries.get_mut(&key) {
            *existing = CacheEntry {
                value,
                expires_at,
                seq: existing.seq,
            };
            return;
        }

        if store.entries.len() >= self.capacity {
            if let Some(evicted) = store.evict_oldest() {
                debug!(key = %evicted, "cache full, evicted oldest entry");
            }
        }

        store.insert_new(key, value, expires_at);
    }

    /// Remove `key` if present.
    pub fn delete(&self, key: &str) {
        self.store().remove(key);
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.store().clear();
    }

    /// Remove every expired entry and return how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut store = self.store();

        let expired: Vec<String> = store
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            store.remove(key);
        }
        expired.len()
    }

    /// Number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.store().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: self.capacity,
            ttl_seconds: self.ttl.as_secs(),
            enabled: self.enabled,
        }
    }

    fn store(&self) -> MutexGuard<'_, Store<V>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V> std::fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("capacity", &self.capacity)
            .field("ttl", &self.ttl)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
