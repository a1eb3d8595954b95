//! Bucket placement and growth policy.

/// Bucket count of a table built with `ChainedHashMap::new`.
pub const DEFAULT_CAPACITY: usize = 64;

// Growth threshold as an exact ratio; `MAX_LOAD_FACTOR` is derived from it.
const LOAD_FACTOR_NUM: u128 = 4;
const LOAD_FACTOR_DEN: u128 = 5;

/// Load factor at or above which an insert doubles the table.
pub const MAX_LOAD_FACTOR: f64 = LOAD_FACTOR_NUM as f64 / LOAD_FACTOR_DEN as f64;

/// Map a 64-bit hash onto `[0, capacity)`.
///
/// The hash is unsigned, so there is no absolute-value step that could
/// overflow on the most negative signed code. Callers must pass a non-zero
/// capacity.
#[inline]
pub(crate) fn bucket_index(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket_index on zero capacity");
    (hash % capacity as u64) as usize
}

/// Whether `len` entries in `capacity` buckets reach `MAX_LOAD_FACTOR`.
///
/// Evaluated as `len * DEN >= capacity * NUM` in integers.
#[inline]
pub(crate) fn needs_growth(len: usize, capacity: usize) -> bool {
    (len as u128) * LOAD_FACTOR_DEN >= (capacity as u128) * LOAD_FACTOR_NUM
}

/// Capacity after one growth step.
#[inline]
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    capacity
        .checked_mul(2)
        .expect("capacity overflow while growing table")
}
