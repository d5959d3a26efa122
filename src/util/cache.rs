//! Memoization table
//!
//! Holds values that are expensive to build and pure once built, such as
//! compiled language pipelines. Entries are kept in insertion order; when the
//! table is full the oldest entry is evicted.

use std::hash::Hash;

use indexmap::IndexMap;

/// Bounded, insertion-ordered memoization table
#[derive(Debug, Clone)]
pub struct MemoTable<K, V> {
    entries: IndexMap<K, V>,
    max_size: usize,
}

impl<K, V> MemoTable<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty table holding at most `max_size` entries (at least one).
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            max_size: max_size.max(1),
        }
    }

    pub fn get(
        &self,
        key: &K,
    ) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert, evicting the oldest entry when full. Returns the replaced value.
    pub fn insert(
        &mut self,
        key: K,
        value: V,
    ) -> Option<V> {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, value)
    }

    /// Return the cached value for `key`, building it with `build` on a miss.
    pub fn get_or_insert_with(
        &mut self,
        key: K,
        build: impl FnOnce() -> V,
    ) -> &V {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.entries.shift_remove_index(0);
        }
        self.entries.entry(key).or_insert_with(build)
    }

    pub fn contains(
        &self,
        key: &K,
    ) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}
