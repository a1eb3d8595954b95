//! ChainedHashMap: bucket array, chain scans and load-factor driven growth.

use crate::bucket::{Bucket, Entry};
use crate::error::MapError;
use crate::hashing::{bucket_index, grown_capacity, needs_growth, DEFAULT_CAPACITY};
use crate::reentrancy::ExclusiveSections;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use log::{debug, trace};
use std::collections::hash_map::RandomState;

/// A hash table with separate chaining.
///
/// Keys are unique. Each key lives in bucket `hash(key) % capacity()`;
/// inserting the entry that brings the load factor to
/// [`MAX_LOAD_FACTOR`](crate::MAX_LOAD_FACTOR) doubles the bucket array
/// before `insert` returns. Capacity never shrinks.
pub struct ChainedHashMap<K, V> {
    hasher: RandomState,
    buckets: Vec<Bucket<K, V>>,
    len: usize,
    sections: ExclusiveSections,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty table with `capacity` buckets. A request for zero buckets gets
    /// one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hasher: RandomState::new(),
            buckets: empty_buckets(capacity.max(1)),
            len: 0,
            sections: ExclusiveSections::new(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of entries stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current length of the bucket array.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `len() / capacity()`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Bucket that `key` occupies in a table of `capacity` buckets.
    ///
    /// Stable for a given key over the life of this map, so
    /// `bucket_index(k, capacity())` names the chain holding `k`.
    ///
    /// # Panics
    ///
    /// If `capacity` is zero.
    pub fn bucket_index<Q>(&self, key: &Q, capacity: usize) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        assert!(capacity > 0, "bucket_index requires a non-zero capacity");
        let _s = self.sections.enter();
        bucket_index(self.make_hash(key), capacity)
    }

    /// Add a mapping for a key that is not yet present.
    ///
    /// Fails with [`MapError::DuplicateKey`] if `key` already maps to a value;
    /// the existing value is left untouched and `value` is dropped.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), MapError> {
        let _s = self.sections.enter();
        let hash = self.make_hash(&key);
        let idx = bucket_index(hash, self.buckets.len());
        if self.buckets[idx].position(hash, &key).is_some() {
            return Err(MapError::DuplicateKey);
        }
        self.buckets[idx].push(Entry { key, value, hash });
        self.len += 1;

        if needs_growth(self.len, self.buckets.len()) {
            Self::grow(&mut self.buckets, self.len);
        }
        Ok(())
    }

    /// Double the bucket array and move every entry to its bucket under the
    /// new capacity. Uses stored hashes only, so no user code runs here.
    ///
    /// Borrows only the bucket array so the caller's section stays open.
    fn grow(buckets: &mut Vec<Bucket<K, V>>, len: usize) {
        let old_capacity = buckets.len();
        let new_capacity = grown_capacity(old_capacity);
        let mut next = empty_buckets(new_capacity);
        for bucket in buckets.iter_mut() {
            for entry in bucket.drain() {
                next[bucket_index(entry.hash, new_capacity)].push(entry);
            }
        }
        debug_assert_eq!(next.iter().map(Bucket::len).sum::<usize>(), len);
        *buckets = next;
        debug!(
            "grew table from {} to {} buckets ({} entries)",
            old_capacity, new_capacity, len
        );
    }

    /// Value mapped to `key`, or [`MapError::KeyNotFound`].
    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _s = self.sections.enter();
        let hash = self.make_hash(key);
        self.buckets[bucket_index(hash, self.buckets.len())]
            .get(hash, key)
            .map(|e| &e.value)
            .ok_or(MapError::KeyNotFound)
    }

    /// Mutable access to the value mapped to `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _s = self.sections.enter();
        let hash = self.make_hash(key);
        let idx = bucket_index(hash, self.buckets.len());
        self.buckets[idx]
            .get_mut(hash, key)
            .map(|e| &mut e.value)
            .ok_or(MapError::KeyNotFound)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _s = self.sections.enter();
        let hash = self.make_hash(key);
        self.buckets[bucket_index(hash, self.buckets.len())]
            .position(hash, key)
            .is_some()
    }

    /// Delete the mapping for `key` and hand back its value. Capacity is
    /// unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _s = self.sections.enter();
        let hash = self.make_hash(key);
        let idx = bucket_index(hash, self.buckets.len());
        let pos = self.buckets[idx]
            .position(hash, key)
            .ok_or(MapError::KeyNotFound)?;
        let entry = self.buckets[idx].take(pos);
        self.len -= 1;
        Ok(entry.value)
    }
}

impl<K, V> ChainedHashMap<K, V> {
    /// Remove every entry. The bucket array keeps its length.
    pub fn clear(&mut self) {
        let _s = self.sections.enter();
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        trace!("cleared table ({} entries dropped)", self.len);
        self.len = 0;
    }

    /// Snapshot of all keys, in bucket order then insertion order within a
    /// bucket. Later changes to the table do not affect the returned vector.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let _s = self.sections.enter();
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter_entries().map(|e| e.key.clone()));
        out
    }

    /// Entries in the same order as [`keys`](Self::keys).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            chain: None,
            remaining: self.len,
        }
    }

    fn iter_entries(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.buckets.iter().flat_map(|b| b.iter())
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Bucket::new);
    buckets
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for ChainedHashMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let _s = self.sections.enter();
        Self {
            hasher: self.hasher.clone(),
            buckets: self.buckets.clone(),
            len: self.len,
            sections: ExclusiveSections::new(),
        }
    }
}

impl<K, V> fmt::Debug for ChainedHashMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over `(&K, &V)` in bucket order.
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Bucket<K, V>>,
    chain: Option<core::slice::Iter<'a, Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.as_mut().and_then(|c| c.next()) {
                self.remaining -= 1;
                return Some((&e.key, &e.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` in bucket order.
pub struct IterMut<'a, K, V> {
    buckets: core::slice::IterMut<'a, Bucket<K, V>>,
    chain: Option<core::slice::IterMut<'a, Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(Entry { key, value, .. }) = self.chain.as_mut().and_then(|c| c.next()) {
                self.remaining -= 1;
                return Some((key, value));
            }
            self.chain = Some(self.buckets.next()?.iter_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut ChainedHashMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
impl<K, V> ChainedHashMap<K, V> {
    /// Chain lengths, for placement checks in tests.
    pub(crate) fn chain_lens(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.len()).collect()
    }

    /// Whether every entry sits in the bucket its stored hash selects.
    pub(crate) fn placement_holds(&self) -> bool {
        let cap = self.buckets.len();
        self.buckets
            .iter()
            .enumerate()
            .all(|(i, b)| b.iter().all(|e| bucket_index(e.hash, cap) == i))
    }
}
