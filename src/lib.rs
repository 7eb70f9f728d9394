//! Passtable - Static work partitioning for fixed-length candidate spaces
//!
//! Splits the space of all `pool_len ^ password_length` strings over a pool
//! of symbols between N independent workers. Each worker receives one
//! column of a partition table: a pool index range per character position.
//! Enumerating the nested ranges of its column, a worker visits exactly its
//! own share of the space, with no overlap, no gaps and no coordination
//! with other workers at runtime.
//!
//! It implements:
//! - Range splitting of the pool for one position
//! - Recursive refinement of streams that drew identical ranges
//! - An immutable, serializable partition table
//! - Per-stream views for counting, membership and resuming
//!
//! # Examples
//!
//! ```rust
//! use passtable::{generate, Entry};
//!
//! // Pool `a,b,c`, 2-character candidates, 4 workers
//! let table = generate(3, 2, 4).unwrap();
//!
//! assert_eq!(table.get(0, 3), Entry::single(2));
//! assert_eq!(table.get(1, 3), Entry::new(0, 2));
//!
//! // Every candidate has exactly one owner
//! assert_eq!(table.owners(&[2, 1]).unwrap(), vec![3]);
//! ```

pub mod config;
pub mod distribute;
pub mod entry;
pub mod error;
pub mod generate;
mod refine;
pub mod stream;
pub mod table;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use config::{PartitionConfig, TiePolicy};
pub use distribute::distribute;
pub use entry::Entry;
pub use error::{PartitionError, Result};
pub use generate::{generate, generate_with};
pub use stream::{StreamIndices, StreamSpace};
pub use table::Table;
