//! Partition table: the `positions x streams` grid of pool ranges
//!
//! ```text
//!   2 columns (streams)
//!    ____+____
//!   /         \
//!   +----+----+ \
//!   |s0p0|s1p0|  |
//!   +----+----+  |
//!   |s0p1|s1p1|  + 3 rows (character positions)
//!   +----+----+  |
//!   |s0p2|s1p2|  |
//!   +----+----+ /
//! ```
//!
//! Cells are stored row-major, so the streams refined together at one
//! position always form a contiguous slice of that row.

use crate::entry::Entry;
use crate::error::{PartitionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable partition table produced by [`generate`](fn@crate::generate)
///
/// Indexed by `(position, stream)`. Row 0 is the innermost loop of a
/// worker's enumeration, row `rows - 1` the outermost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableData", into = "TableData")]
pub struct Table {
    pool_len: usize,
    rows: usize,
    cols: usize,
    entries: Vec<Entry>,
}

impl Table {
    /// Allocate a table with every cell set to the full pool range
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailure` if `rows * cols` overflows or the
    /// allocator refuses the request.
    pub(crate) fn allocate(pool_len: usize, rows: usize, cols: usize) -> Result<Self> {
        let failure = PartitionError::AllocationFailure { rows, cols };
        let cells = rows.checked_mul(cols).ok_or_else(|| failure.clone())?;

        let mut entries = Vec::new();
        entries.try_reserve_exact(cells).map_err(|_| failure)?;
        entries.resize(cells, Entry::full(pool_len));

        Ok(Self {
            pool_len,
            rows,
            cols,
            entries,
        })
    }

    /// Number of symbols in the pool
    pub fn pool_len(&self) -> usize {
        self.pool_len
    }

    /// Number of character positions
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of streams
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry for `stream` at `position`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range. Use [`Table::try_get`] for a
    /// checked lookup.
    pub fn get(&self, position: usize, stream: usize) -> Entry {
        assert!(position < self.rows, "position out of range");
        assert!(stream < self.cols, "stream out of range");
        self.entries[self.cols * position + stream]
    }

    /// Checked variant of [`Table::get`]
    pub fn try_get(&self, position: usize, stream: usize) -> Result<Entry> {
        self.check_position(position)?;
        self.check_stream(stream)?;
        Ok(self.entries[self.cols * position + stream])
    }

    /// All streams' entries at one position
    pub fn row(&self, position: usize) -> Result<&[Entry]> {
        self.check_position(position)?;
        Ok(self.cells(position))
    }

    /// One stream's entries, position 0 first
    pub fn column(&self, stream: usize) -> Result<Vec<Entry>> {
        self.check_stream(stream)?;
        Ok((0..self.rows)
            .map(|position| self.entries[self.cols * position + stream])
            .collect())
    }

    pub(crate) fn cells(&self, position: usize) -> &[Entry] {
        let start = self.cols * position;
        &self.entries[start..start + self.cols]
    }

    pub(crate) fn row_mut(&mut self, position: usize) -> &mut [Entry] {
        let start = self.cols * position;
        &mut self.entries[start..start + self.cols]
    }

    pub(crate) fn check_stream(&self, stream: usize) -> Result<()> {
        if stream < self.cols {
            Ok(())
        } else {
            Err(PartitionError::StreamOutOfRange {
                stream,
                streams: self.cols,
            })
        }
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.rows {
            Ok(())
        } else {
            Err(PartitionError::PositionOutOfRange {
                position,
                rows: self.rows,
            })
        }
    }
}

/// One line per stream, positions left to right
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stream in 0..self.cols {
            for position in 0..self.rows {
                if position > 0 {
                    f.write_str(" - ")?;
                }
                write!(f, "{}", self.entries[self.cols * position + stream])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized form, validated on the way back in
#[derive(Serialize, Deserialize)]
struct TableData {
    pool_len: usize,
    rows: usize,
    cols: usize,
    entries: Vec<Entry>,
}

impl From<Table> for TableData {
    fn from(table: Table) -> Self {
        Self {
            pool_len: table.pool_len,
            rows: table.rows,
            cols: table.cols,
            entries: table.entries,
        }
    }
}

impl TryFrom<TableData> for Table {
    type Error = PartitionError;

    fn try_from(data: TableData) -> Result<Self> {
        if data.pool_len == 0 || data.rows == 0 || data.cols == 0 {
            return Err(PartitionError::invalid(
                "table",
                "pool_len, rows and cols must all be at least 1",
            ));
        }

        let expected = data.rows.checked_mul(data.cols).ok_or_else(|| {
            PartitionError::invalid(
                "table",
                format!("{} x {} cells overflow usize", data.rows, data.cols),
            )
        })?;
        if data.entries.len() != expected {
            return Err(PartitionError::LengthMismatch {
                expected,
                actual: data.entries.len(),
            });
        }

        if let Some(entry) = data.entries.iter().find(|e| e.last() >= data.pool_len) {
            return Err(PartitionError::invalid(
                "table",
                format!("entry {} exceeds pool of {} symbols", entry, data.pool_len),
            ));
        }

        Ok(Self {
            pool_len: data.pool_len,
            rows: data.rows,
            cols: data.cols,
            entries: data.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn test_allocate_defaults_to_full_pool() {
        let table = Table::allocate(4, 2, 3).unwrap();
        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 3);
        assert_eq!(table.pool_len(), 4);
        for position in 0..2 {
            for stream in 0..3 {
                assert_eq!(table.get(position, stream), Entry::new(0, 3));
            }
        }
    }

    #[test]
    fn test_allocate_overflow_is_reported() {
        let err = Table::allocate(2, usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            PartitionError::AllocationFailure {
                rows: usize::MAX,
                cols: 2
            }
        );
    }

    #[test]
    fn test_checked_lookups() {
        let table = generate(3, 2, 4).unwrap();
        assert!(table.try_get(1, 3).is_ok());
        assert_eq!(
            table.try_get(2, 0),
            Err(PartitionError::PositionOutOfRange {
                position: 2,
                rows: 2
            })
        );
        assert_eq!(
            table.try_get(0, 4),
            Err(PartitionError::StreamOutOfRange {
                stream: 4,
                streams: 4
            })
        );
        assert!(table.column(9).is_err());
        assert!(table.row(5).is_err());
    }

    #[test]
    fn test_row_and_column_agree_with_get() {
        let table = generate(3, 3, 7).unwrap();
        for position in 0..table.rows() {
            let row = table.row(position).unwrap();
            for stream in 0..table.cols() {
                assert_eq!(row[stream], table.get(position, stream));
                assert_eq!(table.column(stream).unwrap()[position], row[stream]);
            }
        }
    }

    #[test]
    #[should_panic(expected = "stream out of range")]
    fn test_get_out_of_range_panics() {
        let table = generate(3, 2, 2).unwrap();
        table.get(0, 2);
    }

    #[test]
    fn test_display_one_line_per_stream() {
        let table = generate(2, 2, 2).unwrap();
        assert_eq!(table.to_string(), "0,0 - 0,1\n1,1 - 0,1\n");
    }

    #[test]
    fn test_json_roundtrip() {
        let table = generate(5, 3, 16).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_tables() {
        let short = r#"{"pool_len":3,"rows":2,"cols":2,"entries":[{"first":0,"last":2}]}"#;
        assert!(serde_json::from_str::<Table>(short).is_err());

        let outside = r#"{"pool_len":2,"rows":1,"cols":1,"entries":[{"first":0,"last":5}]}"#;
        assert!(serde_json::from_str::<Table>(outside).is_err());

        let inverted = r#"{"pool_len":4,"rows":1,"cols":1,"entries":[{"first":3,"last":1}]}"#;
        assert!(serde_json::from_str::<Table>(inverted).is_err());

        let huge = format!(
            r#"{{"pool_len":2,"rows":{},"cols":2,"entries":[]}}"#,
            usize::MAX
        );
        let err = serde_json::from_str::<Table>(&huge).unwrap_err();
        assert!(err.to_string().contains("overflow"));

        let data = TableData {
            pool_len: 2,
            rows: usize::MAX,
            cols: 2,
            entries: Vec::new(),
        };
        assert!(matches!(
            Table::try_from(data),
            Err(PartitionError::InvalidArgument { name: "table", .. })
        ));
    }
}
