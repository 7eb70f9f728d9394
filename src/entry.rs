//! Entry: an inclusive index range into the symbol pool
//!
//! Each cell of a partition table holds one entry. A worker iterating an
//! entry visits every pool index in `first..=last`.

use crate::error::PartitionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive pool index range `[first, last]`
///
/// Two entries are equal iff both bounds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EntryData", into = "EntryData")]
pub struct Entry {
    first: usize,
    last: usize,
}

impl Entry {
    /// Create an entry covering `first..=last`
    ///
    /// # Panics
    ///
    /// Panics if `first > last`.
    pub fn new(first: usize, last: usize) -> Self {
        assert!(first <= last, "Entry bounds must satisfy first <= last");
        Self { first, last }
    }

    /// Singleton entry `[index, index]`
    pub fn single(index: usize) -> Self {
        Self {
            first: index,
            last: index,
        }
    }

    /// The whole pool, `[0, pool_len - 1]`
    ///
    /// # Panics
    ///
    /// Panics if `pool_len` is zero.
    pub fn full(pool_len: usize) -> Self {
        assert!(pool_len > 0, "Pool length must be at least 1");
        Self {
            first: 0,
            last: pool_len - 1,
        }
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of pool symbols covered
    pub fn width(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }

    /// Nearest in-range index
    ///
    /// Indices below the range snap to `first`, indices above it to `last`.
    pub fn clamp(&self, index: usize) -> usize {
        index.clamp(self.first, self.last)
    }

    /// The pool symbols this entry selects
    ///
    /// # Panics
    ///
    /// Panics if the entry reaches past the end of `pool`.
    pub fn symbols<'a, T>(&self, pool: &'a [T]) -> &'a [T] {
        &pool[self.first..=self.last]
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.last)
    }
}

/// Serialized form; bounds are checked on the way back in
#[derive(Serialize, Deserialize)]
struct EntryData {
    first: usize,
    last: usize,
}

impl From<Entry> for EntryData {
    fn from(entry: Entry) -> Self {
        Self {
            first: entry.first,
            last: entry.last,
        }
    }
}

impl TryFrom<EntryData> for Entry {
    type Error = PartitionError;

    fn try_from(data: EntryData) -> Result<Self, PartitionError> {
        if data.first > data.last {
            return Err(PartitionError::invalid(
                "entry",
                format!("first ({}) exceeds last ({})", data.first, data.last),
            ));
        }
        Ok(Self {
            first: data.first,
            last: data.last,
        })
    }
}
