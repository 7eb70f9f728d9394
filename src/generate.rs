//! Table generator: builds a complete partition table in one pass
//!
//! Pool `a,b,c`, 3-character candidates, 4 streams:
//!
//! ```text
//!          pos0  pos1  pos2
//! stream0: [a,a] [a,b] [a,c] --> aaa, aba, aab, abb, aac, abc
//! stream1: [a,a] [c,c] [a,c] --> aca, acb, acc
//! stream2: [b,b] [a,c] [a,c] --> baa, bba, bca, bab, ... (9)
//! stream3: [c,c] [a,c] [a,c] --> caa, cba, cca, cab, ... (9)
//! ```
//!
//! Position 0 is split first. Streams 0 and 1 both drew `a` there, so the
//! pool is split again between just those two at position 1.

use crate::config::{PartitionConfig, TiePolicy};
use crate::distribute::distribute_into;
use crate::error::Result;
use crate::refine::refine_ties;
use crate::table::Table;

/// Build the partition table for `stream_count` workers over
/// `pool_len ^ password_length` candidates
///
/// Uses [`TiePolicy::Reject`], so every candidate belongs to exactly one
/// stream.
///
/// # Errors
///
/// Returns `InvalidArgument` for zero inputs or more streams than
/// candidates, and `AllocationFailure` if the grid cannot be allocated.
///
/// # Example
///
/// ```
/// use passtable::{generate, Entry};
///
/// let table = generate(3, 2, 4).unwrap();
/// assert_eq!(table.get(0, 2), Entry::single(1));
/// assert_eq!(table.get(1, 2), Entry::new(0, 2));
/// ```
pub fn generate(pool_len: usize, password_length: usize, stream_count: usize) -> Result<Table> {
    generate_with(&PartitionConfig::new(pool_len, password_length, stream_count))
}

/// Build the partition table described by `config`
pub fn generate_with(config: &PartitionConfig) -> Result<Table> {
    config.validate()?;
    tracing::debug!(
        pool_len = config.pool_len,
        password_length = config.password_length,
        stream_count = config.stream_count,
        tie_policy = ?config.tie_policy,
        "generating partition table"
    );

    let mut table = Table::allocate(
        config.pool_len,
        config.password_length,
        config.stream_count,
    )?;

    distribute_into(config.pool_len, table.row_mut(0));
    let unresolved = refine_ties(&mut table, 0, 0, config.stream_count);

    // Unreachable under `Reject`, which bounds the stream count
    debug_assert!(unresolved == 0 || config.tie_policy == TiePolicy::AllowOverlap);
    tracing::debug!(
        rows = table.rows(),
        cols = table.cols(),
        unresolved,
        "partition table ready"
    );

    Ok(table)
}
