//! Recursive refiner: breaks ties between streams at deeper positions
//!
//! After a split, neighbouring streams may hold the same entry (only the
//! "more streams than symbols" regime produces these). Such a run of
//! streams is re-split over the whole pool at the next position, and any
//! runs produced there are refined in turn. Each level moves one position
//! deeper, so recursion depth is bounded by the number of rows.

use crate::distribute::distribute_into;
use crate::entry::Entry;
use crate::table::Table;

/// Re-split `count` streams starting at column `start` at `position`,
/// then refine any ties this produces
///
/// Returns the number of streams left tied after the last position.
pub(crate) fn refine(table: &mut Table, position: usize, start: usize, count: usize) -> usize {
    debug_assert!(count > 1);
    tracing::trace!(position, start, count, "refining tied streams");

    let pool_len = table.pool_len();
    distribute_into(pool_len, &mut table.row_mut(position)[start..start + count]);

    refine_ties(table, position, start, count)
}

/// Refine every run of identical entries among columns
/// `start..start + count` at `position`
///
/// Returns the number of streams still tied once the rows run out.
pub(crate) fn refine_ties(table: &mut Table, position: usize, start: usize, count: usize) -> usize {
    let tied = runs(&table.cells(position)[start..start + count]);

    let mut unresolved = 0;
    for (offset, len) in tied {
        if position + 1 < table.rows() {
            unresolved += refine(table, position + 1, start + offset, len);
        } else {
            tracing::warn!(
                position,
                start = start + offset,
                count = len,
                "streams remain tied at the last position"
            );
            unresolved += len;
        }
    }
    unresolved
}

/// Maximal runs of identical consecutive entries longer than one,
/// as `(offset, len)` pairs
fn runs(entries: &[Entry]) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut offset = 0;
    for run in entries.chunk_by(|a, b| a == b) {
        if run.len() > 1 {
            found.push((offset, run.len()));
        }
        offset += run.len();
    }
    found
}
