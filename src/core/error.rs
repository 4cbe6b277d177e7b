//! Engine error type

use thiserror::Error;

/// Errors reported by the guessing engine
///
/// `InvalidLimit`, `TargetOutOfRange` and `UnknownStrategy` are rejected
/// inputs. `RangeInvariant` and `DegenerateBias` mean the search logic itself
/// is broken and are never expected in a correct build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("limit must be at least 1, got {limit}")]
    InvalidLimit { limit: u32 },

    #[error("target {target} is outside [1, {limit}]")]
    TargetOutOfRange { target: u32, limit: u32 },

    #[error("unknown strategy '{0}' (expected blind, binary or bayesian)")]
    UnknownStrategy(String),

    #[error("guess {guess} violates live range [{low}, {high}]")]
    RangeInvariant { low: u32, high: u32, guess: u32 },

    #[error("bias distribution has no mass in live range [{low}, {high}]")]
    DegenerateBias { low: u32, high: u32 },
}

impl GameError {
    /// Whether this error indicates a bug rather than bad caller input
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::RangeInvariant { .. } | Self::DegenerateBias { .. }
        )
    }
}

/// Reject limits below 1
///
/// # Errors
/// Returns `GameError::InvalidLimit` when `limit == 0`.
pub const fn validate_limit(limit: u32) -> Result<u32, GameError> {
    if limit == 0 {
        Err(GameError::InvalidLimit { limit })
    } else {
        Ok(limit)
    }
}

/// Reject targets outside `[1, limit]`
///
/// # Errors
/// Returns `GameError::InvalidLimit` for a zero limit and
/// `GameError::TargetOutOfRange` for a target outside the game's bounds.
pub const fn validate_target(target: u32, limit: u32) -> Result<u32, GameError> {
    if limit == 0 {
        return Err(GameError::InvalidLimit { limit });
    }
    if target == 0 || target > limit {
        return Err(GameError::TargetOutOfRange { target, limit });
    }
    Ok(target)
}
