//! Key/value capability surface for code that only needs a store, not a
//! particular table.

use crate::chained_hash_map::ChainedHashMap;
use crate::error::MapError;
use core::hash::Hash;

/// The operations a collaborator (for example a graph loader that maps node
/// names to nodes) relies on. Absence and failure are reported through
/// [`MapError`], never through a placeholder value.
pub trait KeyValueStore<K, V> {
    /// Fails with [`MapError::DuplicateKey`] if `key` is already present.
    fn insert(&mut self, key: K, value: V) -> Result<(), MapError>;

    /// Fails with [`MapError::KeyNotFound`] if `key` is absent.
    fn get(&self, key: &K) -> Result<&V, MapError>;

    fn contains_key(&self, key: &K) -> bool;

    /// Fails with [`MapError::KeyNotFound`] if `key` is absent.
    fn remove(&mut self, key: &K) -> Result<V, MapError>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    fn keys(&self) -> Vec<K>;
}

impl<K, V> KeyValueStore<K, V> for ChainedHashMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Result<(), MapError> {
        ChainedHashMap::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Result<&V, MapError> {
        ChainedHashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        ChainedHashMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V, MapError> {
        ChainedHashMap::remove(self, key)
    }

    fn clear(&mut self) {
        ChainedHashMap::clear(self)
    }

    fn len(&self) -> usize {
        ChainedHashMap::len(self)
    }

    fn capacity(&self) -> usize {
        ChainedHashMap::capacity(self)
    }

    fn keys(&self) -> Vec<K> {
        ChainedHashMap::keys(self)
    }
}
