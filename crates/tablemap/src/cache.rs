use std::{
    borrow::Borrow,
    collections::HashMap,
    hash::Hash,
    sync::{Arc, PoisonError, RwLock},
};

/// A thread-safe map of derived artifacts.
///
/// Inserts never overwrite: when two callers race to compute the value for
/// a key, the first value stored is kept and returned to both.
///
/// A cache built with a capacity checks its size before taking the write
/// lock, so concurrent inserts may push it slightly past the capacity. Once
/// the cache is full, new values are handed back to the caller without being
/// stored.
#[derive(Debug)]
pub struct MappingCache<K, V> {
    entries: RwLock<HashMap<K, Arc<V>>>,
    capacity: Option<usize>,
}

impl<K: Eq + Hash, V> MappingCache<K, V> {
    pub fn new() -> Self {
        MappingCache {
            entries: RwLock::new(HashMap::new()),
            capacity: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MappingCache {
            entries: RwLock::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read(|entries| entries.get(key).cloned())
    }

    /// Stores `value` unless the key is already present or the cache is
    /// full, and returns the value the cache now holds for the key.
    pub fn put(&self, key: K, value: V) -> Arc<V> {
        if let Some(capacity) = self.capacity {
            if self.len() >= capacity {
                return self.get(&key).unwrap_or_else(|| Arc::new(value));
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.entry(key).or_insert_with(|| Arc::new(value)).clone()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read(|entries| entries.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.read(HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn read<T>(&self, f: impl FnOnce(&HashMap<K, Arc<V>>) -> T) -> T {
        f(&self.entries.read().unwrap_or_else(PoisonError::into_inner))
    }
}

impl<K: Eq + Hash, V> Default for MappingCache<K, V> {
    fn default() -> Self {
        MappingCache::new()
    }
}
