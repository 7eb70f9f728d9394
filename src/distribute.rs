//! Range splitter: divides the pool index range among a number of streams
//!
//! Three regimes are handled:
//!
//! - **Fewer streams than symbols:** contiguous near-equal ranges,
//!   e.g. 5 symbols in 3 streams ==> `[0,1] [2,3] [4,4]`
//! - **As many streams as symbols:** one symbol per stream,
//!   e.g. 4 symbols in 4 streams ==> `[0,0] [1,1] [2,2] [3,3]`
//! - **More streams than symbols:** singletons, repeated and sorted,
//!   e.g. 3 symbols in 4 streams ==> `[0,0] [0,0] [1,1] [2,2]`
//!
//! In the last regime the duplicated entries are what the refiner later
//! breaks apart at deeper character positions.
//!
//! # Example
//!
//! ```
//! use passtable::{distribute, Entry};
//!
//! let entries = distribute(5, 3).unwrap();
//! assert_eq!(entries, vec![Entry::new(0, 1), Entry::new(2, 3), Entry::new(4, 4)]);
//! ```

use crate::entry::Entry;
use crate::error::{PartitionError, Result};

/// Split `[0, pool_len - 1]` into exactly `stream_count` entries
///
/// # Errors
///
/// Returns `InvalidArgument` if either argument is zero.
pub fn distribute(pool_len: usize, stream_count: usize) -> Result<Vec<Entry>> {
    if pool_len == 0 {
        return Err(PartitionError::invalid("pool_len", "must be at least 1"));
    }
    if stream_count == 0 {
        return Err(PartitionError::invalid("stream_count", "must be at least 1"));
    }

    let mut entries = vec![Entry::full(pool_len); stream_count];
    distribute_into(pool_len, &mut entries);
    Ok(entries)
}

/// Split the pool across `out.len()` streams, writing in place
///
/// Callers guarantee `pool_len >= 1` and a non-empty `out`.
pub(crate) fn distribute_into(pool_len: usize, out: &mut [Entry]) {
    let streams = out.len();
    debug_assert!(pool_len > 0 && streams > 0);

    if streams == 1 {
        out[0] = Entry::full(pool_len);
    } else if streams == pool_len {
        split_equal(out);
    } else if streams > pool_len {
        split_more(pool_len, out);
    } else {
        split_less(pool_len, out);
    }
}

/// 1,2,3,4 in 4 streams ==> [1],[2],[3],[4]
fn split_equal(out: &mut [Entry]) {
    for (i, entry) in out.iter_mut().enumerate() {
        *entry = Entry::single(i);
    }
}

/// 1,2,3 in 4 streams ==> [1],[1],[2],[3]
fn split_more(pool_len: usize, out: &mut [Entry]) {
    for (i, entry) in out.iter_mut().enumerate() {
        *entry = Entry::single(i % pool_len);
    }

    // Entries sharing `first` are identical singletons, so the unstable
    // order among them is irrelevant.
    out.sort_unstable_by_key(Entry::first);
}

/// 1,2,3,4,5 in 3 streams ==> [1,2],[3,4],[5]
///
/// The first `pool_len % streams` streams take one extra symbol.
fn split_less(pool_len: usize, out: &mut [Entry]) {
    let streams = out.len();
    let base = pool_len / streams;
    let extra = pool_len % streams;

    let mut first = 0;
    for (i, entry) in out.iter_mut().enumerate() {
        let width = if i < extra { base + 1 } else { base };
        *entry = Entry::new(first, first + width - 1);
        first += width;
    }
}
