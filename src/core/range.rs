//! Live search range
//!
//! A `Range` is the inclusive interval of values still consistent with all
//! feedback received so far. It only ever shrinks.

use super::error::GameError;
use std::fmt;

/// Feedback for a single guess, from the guesser's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Guess was above the target: go lower
    TooHigh,
    /// Guess was below the target: go higher
    TooLow,
    /// Guess matched the target
    Correct,
}

impl Feedback {
    /// Compare a guess against the hidden target
    #[must_use]
    pub fn of(guess: u32, target: u32) -> Self {
        match guess.cmp(&target) {
            std::cmp::Ordering::Greater => Self::TooHigh,
            std::cmp::Ordering::Less => Self::TooLow,
            std::cmp::Ordering::Equal => Self::Correct,
        }
    }
}

/// Inclusive integer interval `[low, high]` with `low <= high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    low: u32,
    high: u32,
}

impl Range {
    /// The starting range `[1, limit]` of a game
    ///
    /// # Errors
    /// Returns `GameError::InvalidLimit` if `limit` is zero.
    pub fn full(limit: u32) -> Result<Self, GameError> {
        super::error::validate_limit(limit)?;
        Ok(Self { low: 1, high: limit })
    }

    #[inline]
    #[must_use]
    pub const fn low(&self) -> u32 {
        self.low
    }

    #[inline]
    #[must_use]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Number of values still possible
    #[inline]
    #[must_use]
    pub const fn span(&self) -> u32 {
        self.high - self.low + 1
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        self.low <= value && value <= self.high
    }

    /// Apply the feedback for `guess` against `target`
    ///
    /// On a miss the side of the range that excludes the target is cut off at
    /// the guess. The returned range always still contains the target, so the
    /// span drops by at least one on every non-terminal guess.
    ///
    /// # Errors
    /// Returns `GameError::RangeInvariant` if the guess or the target lies
    /// outside the current range; narrowing would otherwise leave `low > high`.
    pub fn narrow(self, guess: u32, target: u32) -> Result<(Self, Feedback), GameError> {
        if !self.contains(guess) || !self.contains(target) {
            return Err(GameError::RangeInvariant {
                low: self.low,
                high: self.high,
                guess,
            });
        }

        let feedback = Feedback::of(guess, target);
        let next = match feedback {
            Feedback::TooHigh => Self {
                low: self.low,
                high: guess - 1,
            },
            Feedback::TooLow => Self {
                low: guess + 1,
                high: self.high,
            },
            Feedback::Correct => self,
        };

        Ok((next, feedback))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
