//! Limits for strict pointer resolution

use crate::error::{HashpathError, Result};

/// Configuration limits for pointer resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    /// Maximum pointer depth (number of segments)
    pub max_depth: usize,
    /// Maximum pointer string length
    pub max_pointer_length: usize,
}

/// Defaults to the hard maximums; lower limits bound pointers taken from
/// untrusted input.
impl Default for PathLimits {
    fn default() -> Self {
        Self::hard_maximums()
    }
}

impl PathLimits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self {
            max_depth: 256,
            max_pointer_length: 8192,
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_depth > hard.max_depth {
            tracing::debug!(max_depth = self.max_depth, "rejecting path limits");
            return Err(HashpathError::LimitsExceedHardMaximum {
                reason: format!(
                    "max_depth {} exceeds hard limit {}",
                    self.max_depth, hard.max_depth
                ),
                max_depth: hard.max_depth,
                max_pointer_length: hard.max_pointer_length,
            });
        }

        if self.max_pointer_length > hard.max_pointer_length {
            tracing::debug!(
                max_pointer_length = self.max_pointer_length,
                "rejecting path limits"
            );
            return Err(HashpathError::LimitsExceedHardMaximum {
                reason: format!(
                    "max_pointer_length {} exceeds hard limit {}",
                    self.max_pointer_length, hard.max_pointer_length
                ),
                max_depth: hard.max_depth,
                max_pointer_length: hard.max_pointer_length,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_within_hard_max() {
        assert!(PathLimits::default().validate().is_ok());
        assert!(PathLimits::hard_maximums().validate().is_ok());
    }

    #[test]
    fn default_is_hard_maximum() {
        assert_eq!(PathLimits::default(), PathLimits::hard_maximums());
    }

    #[test]
    fn rejects_excessive_depth() {
        let limits = PathLimits {
            max_depth: 1000,
            ..PathLimits::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(HashpathError::LimitsExceedHardMaximum { max_depth: 256, .. })
        ));
    }

    #[test]
    fn rejects_excessive_length() {
        let limits = PathLimits {
            max_pointer_length: 10_000,
            ..PathLimits::default()
        };
        let err = limits.validate().unwrap_err();
        assert!(err.to_string().contains("max_pointer_length 10000"));
    }
}
