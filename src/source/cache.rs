//! Time-to-live cache for fetched records.
//!
//! Successful responses are kept until they go stale; errors are never cached.
//! The current time is passed in so expiry is testable without waiting.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// Keyed cache whose entries expire a fixed time after insertion.
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Returns a clone of the fresh value under `key`.
    ///
    /// Stale entries are evicted on lookup.
    pub fn get(&mut self, key: &K, now: DateTime<Utc>) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if now < entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores `value` under `key`, fresh until `now + ttl`.
    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            Entry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    /// Forgets `key` regardless of freshness.
    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }

    /// Number of entries, fresh or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_expire_after_ttl() {
        let t0 = Utc::now();
        let mut cache = TtlCache::new(Duration::minutes(5));
        cache.insert("launches", 3, t0);

        assert_eq!(cache.get(&"launches", t0 + Duration::minutes(4)), Some(3));
        assert_eq!(cache.get(&"launches", t0 + Duration::minutes(5)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_forgets_fresh_entry() {
        let t0 = Utc::now();
        let mut cache = TtlCache::new(Duration::minutes(10));
        cache.insert("falcon9".to_string(), "Falcon 9", t0);
        cache.invalidate(&"falcon9".to_string());

        assert_eq!(cache.get(&"falcon9".to_string(), t0), None);
        assert_eq!(cache.len(), 0);
    }
}
