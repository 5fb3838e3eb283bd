//! Time-bounded in-memory cache
//!
//! Holds pokemon detail lookups for a short while so that paging back and
//! forth does not refetch every card. Entries expire after a fixed
//! time-to-live and are refetched by the caller.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A cached value and when it stops being fresh
#[derive(Debug, Clone)]
struct CachedEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

impl<V> CachedEntry<V> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Cache with a single time-to-live for every entry
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<K, CachedEntry<V>>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty cache. A zero ttl disables caching.
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(365)),
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Check if entries are ever kept
    pub fn is_enabled(&self) -> bool {
        self.ttl > Duration::zero()
    }

    /// Get a fresh value, if one is cached
    pub async fn get(&self, key: &K) -> Option<V> {
        let now = Utc::now();
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone())
    }

    /// Store a value, replacing any previous entry for the key
    pub async fn insert(&self, key: K, value: V) {
        if !self.is_enabled() {
            return;
        }

        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired(now));
        entries.insert(key, CachedEntry { value, expires_at });
    }

    /// Number of entries held, including expired ones not yet evicted
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Check if nothing is cached
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
