//! Chains: the entries that share one bucket index.

use core::borrow::Borrow;

/// An owned key/value pair plus the hash it was placed with.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
}

/// Entries in insertion order. An empty chain and an unused slot are the
/// same thing; the vector only allocates on first push.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Bucket<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Index of the entry whose key equals `q`. The stored hash is compared
    /// first so `K: Eq` only runs on likely matches.
    pub(crate) fn position<Q>(&self, hash: u64, q: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.entries
            .iter()
            .position(|e| e.hash == hash && e.key.borrow() == q)
    }

    pub(crate) fn get<Q>(&self, hash: u64, q: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.position(hash, q).map(|i| &self.entries[i])
    }

    pub(crate) fn get_mut<Q>(&mut self, hash: u64, q: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let i = self.position(hash, q)?;
        Some(&mut self.entries[i])
    }

    pub(crate) fn push(&mut self, entry: Entry<K, V>) {
        self.entries.push(entry);
    }

    /// Remove the entry at `pos`, keeping the remaining chain order.
    pub(crate) fn take(&mut self, pos: usize) -> Entry<K, V> {
        self.entries.remove(pos)
    }

    /// Drop all entries and release the chain's allocation.
    pub(crate) fn clear(&mut self) {
        self.entries = Vec::new();
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, Entry<K, V>> {
        self.entries.iter_mut()
    }

    /// Move every entry out, leaving the chain empty.
    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Entry<K, V>> {
        self.entries.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: i32, hash: u64) -> Entry<String, i32> {
        Entry {
            key: key.to_string(),
            value,
            hash,
        }
    }

    #[test]
    fn lookup_by_hash_and_key() {
        let mut b = Bucket::new();
        b.push(entry("a", 1, 7));
        b.push(entry("b", 2, 7));
        b.push(entry("c", 3, 9));

        assert_eq!(b.position(7, "b"), Some(1));
        assert_eq!(b.get(9, "c").map(|e| e.value), Some(3));
        // Same key under a different hash is not a match.
        assert_eq!(b.position(9, "a"), None);
        assert_eq!(b.position(7, "z"), None);

        b.get_mut(7, "a").unwrap().value = 10;
        assert_eq!(b.get(7, "a").map(|e| e.value), Some(10));
    }

    #[test]
    fn take_preserves_chain_order() {
        let mut b = Bucket::new();
        for (i, k) in ["a", "b", "c", "d"].iter().enumerate() {
            b.push(entry(k, i as i32, 0));
        }
        let removed = b.take(1);
        assert_eq!(removed.key, "b");
        let keys: Vec<&str> = b.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "c", "d"]);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn clear_and_drain_empty_the_chain() {
        let mut b = Bucket::new();
        b.push(entry("a", 1, 0));
        b.push(entry("b", 2, 0));
        let drained: Vec<_> = b.drain().map(|e| e.value).collect();
        assert_eq!(drained, [1, 2]);
        assert_eq!(b.len(), 0);

        b.push(entry("c", 3, 0));
        b.clear();
        assert_eq!(b.len(), 0);
        assert!(b.iter().next().is_none());
    }
}
