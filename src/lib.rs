//! chain-hashmap: a single-threaded hash table with separate chaining,
//! explicit errors for duplicate and missing keys, and load-factor driven
//! growth.
//!
//! Internal Design:
//!
//! Summary
//! - `ChainedHashMap<K, V>` owns a `Vec` of buckets whose length is the
//!   table's capacity. Each bucket is a chain (`Vec`) of owned entries.
//! - Every operation hashes the key once, picks bucket
//!   `hash % capacity`, and scans that chain.
//! - The insert that brings `len / capacity` to 0.80 doubles the bucket
//!   array and relocates every entry before returning.
//!
//! Invariants
//! - At most one entry per key across the whole table.
//! - `len()` equals the sum of chain lengths; it is tracked, not recounted.
//! - Every entry lives in bucket `hash(key) % capacity()` for the current
//!   capacity, including right after growth.
//! - Capacity only grows. `remove` and `clear` never shrink it.
//!
//! Hashing
//! - Each map owns one `RandomState`, so a key's hash is stable for the
//!   life of the map. Hashes are `u64`; there is no signed absolute value
//!   that could overflow on the most negative code.
//! - Entries store their hash. Growth relocates by stored hash and never
//!   calls `K: Hash`; chain scans compare stored hashes before `K: Eq`.
//! - Growth builds a fresh bucket array and swaps it in, so no caller sees
//!   a half-migrated table.
//!
//! Errors
//! - `insert` on a present key returns `MapError::DuplicateKey`; `get`,
//!   `get_mut` and `remove` on an absent key return `MapError::KeyNotFound`.
//!   Keys are owned values, so an absent key argument cannot be expressed.
//! - Running out of memory or overflowing `usize` while doubling is fatal
//!   and panics/aborts like the standard collections do.
//!
//! Concurrency
//! - No internal synchronization. The map is `Send` but not `Sync`; share
//!   it across threads behind a `Mutex`.
//! - A debug-only reentrancy check panics if user code (`Eq`, `Hash`,
//!   `Clone` on keys) calls back into the same map mid-operation.
//!
//! Non-goals
//! - Shrinking, persistence, iteration-order guarantees beyond "bucket
//!   order, then insertion order within a bucket", and pluggable hashers.

mod bucket;
mod chained_hash_map;
mod chained_hash_map_proptest;
mod error;
mod hashing;
mod reentrancy;
mod store;

// Public surface
pub use chained_hash_map::{ChainedHashMap, Iter, IterMut};
pub use error::MapError;
pub use hashing::{DEFAULT_CAPACITY, MAX_LOAD_FACTOR};
pub use store::KeyValueStore;
