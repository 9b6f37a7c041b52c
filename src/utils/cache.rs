use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

struct Entry {
    value: Value,
    last_used: u64,
}

struct Store {
    entries: HashMap<String, Entry>,
    tick: u64,
}

/// Bounded response cache with least-recently-used eviction. One lock guards
/// all three operations; a read refreshes recency, so `get` takes it too.
pub struct ResponseCache {
    capacity: usize,
    store: Mutex<Store>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            store: Mutex::new(Store {
                entries: HashMap::new(),
                tick: 0,
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        store.tick += 1;
        let tick = store.tick;
        let entry = store.entries.get_mut(key)?;
        entry.last_used = tick;
        Some(entry.value.clone())
    }

    pub fn set(&self, key: &str, value: Value) {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        store.tick += 1;
        let tick = store.tick;
        if !store.entries.contains_key(key) && store.entries.len() >= self.capacity {
            // O(n) scan; the cache is small
            let stale = store
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone());
            if let Some(stale) = stale {
                store.entries.remove(&stale);
            }
        }
        store.entries.insert(
            key.to_string(),
            Entry {
                value,
                last_used: tick,
            },
        );
    }

    /// Drops every entry, whatever key is passed. Single-key removal is not
    /// supported; invalidation has always been all-or-nothing here.
    pub fn delete(&self, _key: &str) {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        store.entries.clear();
    }

    pub fn len(&self) -> usize {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        store.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
