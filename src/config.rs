//! Configuration for partition table generation

use crate::error::{PartitionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when there are more streams than distinct candidates
///
/// With `stream_count <= pool_len ^ password_length` every tie between
/// streams is broken by the last character position. Past that bound some
/// streams necessarily end up with identical columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TiePolicy {
    /// Refuse configurations that cannot be partitioned without overlap
    #[default]
    Reject,

    /// Build the table anyway; streams tied at the last position
    /// enumerate the same candidates
    AllowOverlap,
}

/// `pool_len ^ positions`, or `None` if it does not fit in a `u128`
pub(crate) fn candidate_count(pool_len: usize, positions: usize) -> Option<u128> {
    if pool_len <= 1 {
        return Some(pool_len as u128);
    }
    let exp = u32::try_from(positions).ok()?;
    (pool_len as u128).checked_pow(exp)
}

/// Inputs to [`generate_with`](crate::generate_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Number of symbols in the pool
    pub pool_len: usize,

    /// Number of character positions per candidate
    pub password_length: usize,

    /// Number of independent workers
    pub stream_count: usize,

    /// Handling of streams that cannot be told apart
    #[serde(default)]
    pub tie_policy: TiePolicy,
}

impl PartitionConfig {
    /// Create a configuration with the default tie policy
    pub fn new(pool_len: usize, password_length: usize, stream_count: usize) -> Self {
        Self {
            pool_len,
            password_length,
            stream_count,
            tie_policy: TiePolicy::default(),
        }
    }

    /// Set the tie policy
    pub fn with_tie_policy(mut self, tie_policy: TiePolicy) -> Self {
        self.tie_policy = tie_policy;
        self
    }

    /// Total number of candidates, `pool_len ^ password_length`
    ///
    /// Returns `None` if the count does not fit in a `u128`.
    pub fn space_len(&self) -> Option<u128> {
        candidate_count(self.pool_len, self.password_length)
    }

    /// Check the configuration before any allocation happens
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any count is zero, or if the tie policy
    /// is [`TiePolicy::Reject`] and there are more streams than candidates.
    pub fn validate(&self) -> Result<()> {
        if self.pool_len == 0 {
            return Err(PartitionError::invalid("pool_len", "must be at least 1"));
        }
        if self.password_length == 0 {
            return Err(PartitionError::invalid(
                "password_length",
                "must be at least 1",
            ));
        }
        if self.stream_count == 0 {
            return Err(PartitionError::invalid("stream_count", "must be at least 1"));
        }

        if self.tie_policy == TiePolicy::Reject {
            // An overflowing space is larger than any usize stream count
            let fits = self
                .space_len()
                .map_or(true, |space| self.stream_count as u128 <= space);
            if !fits {
                return Err(PartitionError::invalid(
                    "stream_count",
                    format!(
                        "{} streams exceed the {}^{} available candidates",
                        self.stream_count, self.pool_len, self.password_length
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// `pool^length over N streams`, as used in diagnostics
impl fmt::Display for PartitionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}^{} over {} streams",
            self.pool_len, self.password_length, self.stream_count
        )?;
        if self.tie_policy == TiePolicy::AllowOverlap {
            f.write_str(" (overlap allowed)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_reject() {
        let config = PartitionConfig::new(3, 2, 4);
        assert_eq!(config.tie_policy, TiePolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_counts_rejected() {
        for config in [
            PartitionConfig::new(0, 2, 2),
            PartitionConfig::new(2, 0, 2),
            PartitionConfig::new(2, 2, 0),
        ] {
            assert!(matches!(
                config.validate(),
                Err(PartitionError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_too_many_streams() {
        // 3^2 = 9 candidates
        assert!(PartitionConfig::new(3, 2, 9).validate().is_ok());
        assert!(matches!(
            PartitionConfig::new(3, 2, 10).validate(),
            Err(PartitionError::InvalidArgument {
                name: "stream_count",
                ..
            })
        ));

        // A single-symbol pool has exactly one candidate
        assert!(PartitionConfig::new(1, 8, 2).validate().is_err());

        assert!(PartitionConfig::new(3, 2, 10)
            .with_tie_policy(TiePolicy::AllowOverlap)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_candidate_count() {
        assert_eq!(candidate_count(3, 2), Some(9));
        assert_eq!(candidate_count(1, 64), Some(1));
        assert_eq!(candidate_count(2, 128), None);
        assert_eq!(candidate_count(2, usize::MAX), None);
        assert_eq!(candidate_count(1, usize::MAX), Some(1));
    }

    #[test]
    fn test_space_len_overflow() {
        assert_eq!(PartitionConfig::new(10, 3, 1).space_len(), Some(1000));
        assert_eq!(PartitionConfig::new(95, 64, 1).space_len(), None);
        assert!(PartitionConfig::new(95, 64, usize::MAX).validate().is_ok());
    }

    #[test]
    fn test_config_display() {
        assert_eq!(
            PartitionConfig::new(3, 2, 10).to_string(),
            "3^2 over 10 streams"
        );
        assert_eq!(
            PartitionConfig::new(2, 1, 3)
                .with_tie_policy(TiePolicy::AllowOverlap)
                .to_string(),
            "2^1 over 3 streams (overlap allowed)"
        );
    }

    #[test]
    fn test_config_json() {
        let config: PartitionConfig = serde_json::from_str(
            r#"{"pool_len":26,"password_length":4,"stream_count":8}"#,
        )
        .unwrap();
        assert_eq!(config, PartitionConfig::new(26, 4, 8));

        let json = serde_json::to_string(&config.with_tie_policy(TiePolicy::AllowOverlap)).unwrap();
        assert!(json.contains("AllowOverlap"));
    }
}
