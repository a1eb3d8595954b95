//! Error type shared by every fallible map operation.

use thiserror::Error;

/// Failure signal for table operations. A failed call leaves the table
/// exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// `insert` was given a key that already maps to a value.
    #[error("key already present in table")]
    DuplicateKey,
    /// `get`/`remove` was given a key with no entry.
    #[error("key not found in table")]
    KeyNotFound,
}
