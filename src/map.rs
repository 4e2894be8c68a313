//! Hash map utility with a deliberately small surface.
//!
//! This is a thin wrapper over [`std::collections::HashMap`], not an
//! engineered subsystem: set, get, remove, and the usual size queries.

use std::collections::HashMap;
use std::hash::Hash;

/// A key-value map with a set/get/remove surface.
///
/// # Example
///
/// ```
/// use scds::Map;
///
/// let mut map: Map<&str, u64> = Map::new();
///
/// map.set("answer", 42);
/// assert_eq!(map.get(&"answer"), Some(&42));
///
/// assert!(map.remove(&"answer"));
/// assert!(!map.remove(&"answer"));
/// ```
#[derive(Debug)]
pub struct Map<K, V> {
    inner: HashMap<K, V>,
}

impl<K: Hash + Eq, V> Map<K, V> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Creates an empty map with at least the given capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Sets `key` to `value`, overwriting any previous value.
    #[inline]
    pub fn set(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    /// Returns a reference to the value for `key`, if present.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    /// Removes `key`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, key: &K) -> bool {
        self.inner.remove(key).is_some()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<K: Hash + Eq, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
