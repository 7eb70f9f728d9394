//! Error types for partition table construction and lookup

use thiserror::Error;

/// Result type alias for partition operations
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Errors raised while building or querying a partition table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// An input parameter was zero or otherwise unusable
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The `rows x cols` grid could not be allocated
    #[error("failed to allocate a {rows}x{cols} partition table")]
    AllocationFailure { rows: usize, cols: usize },

    /// Stream index outside `[0, streams)`
    #[error("stream {stream} out of range (table has {streams} streams)")]
    StreamOutOfRange { stream: usize, streams: usize },

    /// Character position outside `[0, rows)`
    #[error("position {position} out of range (table has {rows} positions)")]
    PositionOutOfRange { position: usize, rows: usize },

    /// A candidate index tuple does not have one index per position
    #[error("expected {expected} indices, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl PartitionError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PartitionError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PartitionError::invalid("pool_len", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid argument `pool_len`: must be at least 1"
        );

        let err = PartitionError::AllocationFailure { rows: 3, cols: 7 };
        assert_eq!(err.to_string(), "failed to allocate a 3x7 partition table");
    }
}
