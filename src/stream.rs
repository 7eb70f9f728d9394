//! Per-stream views of a partition table
//!
//! A worker assigned stream `w` enumerates the cartesian product of its
//! column's ranges. Position `rows - 1` is the outermost loop and position
//! 0 the innermost:
//!
//! ```text
//! for i in table.get(2, w).first()..=table.get(2, w).last() {
//!     for j in table.get(1, w).first()..=table.get(1, w).last() {
//!         for k in table.get(0, w).first()..=table.get(0, w).last() {
//!             try_candidate([pool[k], pool[j], pool[i]]);
//!         }
//!     }
//! }
//! ```
//!
//! [`StreamSpace::indices`] walks the same order without nesting loops by
//! hand.

use crate::config::candidate_count;
use crate::entry::Entry;
use crate::error::{PartitionError, Result};
use crate::table::Table;

impl Table {
    /// Read-only view of one stream's subspace
    pub fn stream(&self, stream: usize) -> Result<StreamSpace<'_>> {
        self.check_stream(stream)?;
        Ok(StreamSpace {
            table: self,
            stream,
        })
    }

    /// Size of the full candidate space, `pool_len ^ rows`
    ///
    /// Returns `None` if it does not fit in a `u128`.
    pub fn space_len(&self) -> Option<u128> {
        candidate_count(self.pool_len(), self.rows())
    }

    /// Streams whose subspace contains `candidate`
    ///
    /// `candidate` holds one pool index per position, position 0 first.
    /// A table built with the default tie policy yields exactly one owner.
    pub fn owners(&self, candidate: &[usize]) -> Result<Vec<usize>> {
        self.check_candidate(candidate)?;
        Ok((0..self.cols())
            .filter(|&stream| self.holds(stream, candidate))
            .collect())
    }

    /// Closest candidate inside `stream`'s subspace
    ///
    /// Each position keeps its index when the stream covers it and snaps to
    /// the nearer bound of the stream's range otherwise. Useful for picking
    /// where a worker should resume from a known starting candidate.
    pub fn nearest_start(&self, stream: usize, candidate: &[usize]) -> Result<Vec<usize>> {
        self.check_stream(stream)?;
        self.check_candidate(candidate)?;
        Ok(candidate
            .iter()
            .enumerate()
            .map(|(position, &index)| self.get(position, stream).clamp(index))
            .collect())
    }

    fn holds(&self, stream: usize, candidate: &[usize]) -> bool {
        candidate
            .iter()
            .enumerate()
            .all(|(position, &index)| self.get(position, stream).contains(index))
    }

    fn check_candidate(&self, candidate: &[usize]) -> Result<()> {
        if candidate.len() != self.rows() {
            return Err(PartitionError::LengthMismatch {
                expected: self.rows(),
                actual: candidate.len(),
            });
        }
        Ok(())
    }
}

/// One stream's column of a [`Table`]
#[derive(Debug, Clone, Copy)]
pub struct StreamSpace<'a> {
    table: &'a Table,
    stream: usize,
}

impl<'a> StreamSpace<'a> {
    /// Stream index within the table
    pub fn stream(&self) -> usize {
        self.stream
    }

    /// Entries for this stream, position 0 first
    pub fn entries(&self) -> impl Iterator<Item = Entry> + 'a {
        let table = self.table;
        let stream = self.stream;
        (0..table.rows()).map(move |position| table.get(position, stream))
    }

    /// Number of candidates this stream enumerates
    ///
    /// Returns `None` if the count does not fit in a `u128`.
    pub fn len(&self) -> Option<u128> {
        self.entries()
            .try_fold(1u128, |acc, entry| acc.checked_mul(entry.width() as u128))
    }

    /// Always false; every stream covers at least one candidate
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `candidate` lies in this stream's subspace
    pub fn contains(&self, candidate: &[usize]) -> Result<bool> {
        self.table.check_candidate(candidate)?;
        Ok(self.table.holds(self.stream, candidate))
    }

    /// First candidate in enumeration order
    pub fn first_candidate(&self) -> Vec<usize> {
        self.entries().map(|entry| entry.first()).collect()
    }

    /// Iterate every candidate as pool indices, position 0 varying fastest
    pub fn indices(&self) -> StreamIndices {
        let bounds: Vec<Entry> = self.entries().collect();
        let current = Some(bounds.iter().map(Entry::first).collect());
        StreamIndices { bounds, current }
    }
}

/// Odometer over a stream's subspace, see [`StreamSpace::indices`]
#[derive(Debug, Clone)]
pub struct StreamIndices {
    bounds: Vec<Entry>,
    current: Option<Vec<usize>>,
}

impl Iterator for StreamIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let item = self.current.clone()?;

        let digits = self.current.as_mut()?;
        let mut carried = true;
        for (digit, bound) in digits.iter_mut().zip(&self.bounds) {
            if *digit < bound.last() {
                *digit += 1;
                carried = false;
                break;
            }
            *digit = bound.first();
        }
        if carried {
            self.current = None;
        }

        Some(item)
    }
}
