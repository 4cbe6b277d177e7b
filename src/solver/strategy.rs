//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{GameError, Range};
use crate::distribution::BiasModel;
use rand::Rng;
use std::fmt;

/// A strategy for picking the next guess inside the live range
pub trait Strategy {
    /// Pick the next guess
    ///
    /// The guess must lie inside `range`; the game runner rejects anything
    /// else as an invariant violation.
    ///
    /// # Errors
    /// Returns an error only when the strategy's own state cannot produce a
    /// guess for this range.
    fn next_guess<R: Rng + ?Sized>(&self, range: Range, rng: &mut R) -> Result<u32, GameError>;

    /// Which strategy this is
    fn kind(&self) -> StrategyKind;
}

/// Strategy names, without any per-game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Blind,
    Binary,
    Bayesian,
}

impl StrategyKind {
    pub const ALL: [Self; 3] = [Self::Blind, Self::Binary, Self::Bayesian];

    /// Parse a strategy name
    ///
    /// Supported names: "blind"/"random", "binary"/"optimal", "bayesian"
    ///
    /// # Errors
    /// Returns `GameError::UnknownStrategy` for anything else.
    pub fn from_name(name: &str) -> Result<Self, GameError> {
        match name.to_ascii_lowercase().as_str() {
            "blind" | "random" => Ok(Self::Blind),
            "binary" | "optimal" => Ok(Self::Binary),
            "bayesian" | "bayes" => Ok(Self::Bayesian),
            _ => Err(GameError::UnknownStrategy(name.to_string())),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blind => "blind",
            Self::Binary => "binary",
            Self::Bayesian => "bayesian",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    Blind(BlindSearch),
    Binary(BinarySearch),
    Bayesian(BayesianSearch),
}

impl StrategyType {
    /// Build a ready-to-play strategy for games on `[1, limit]`
    ///
    /// # Errors
    /// Returns `GameError::InvalidLimit` if the Bayesian model cannot be
    /// built for `limit`.
    pub fn build(kind: StrategyKind, limit: u32) -> Result<Self, GameError> {
        Ok(match kind {
            StrategyKind::Blind => Self::Blind(BlindSearch),
            StrategyKind::Binary => Self::Binary(BinarySearch),
            StrategyKind::Bayesian => Self::Bayesian(BayesianSearch::new(limit)?),
        })
    }
}

impl Strategy for StrategyType {
    fn next_guess<R: Rng + ?Sized>(&self, range: Range, rng: &mut R) -> Result<u32, GameError> {
        match self {
            Self::Blind(s) => s.next_guess(range, rng),
            Self::Binary(s) => s.next_guess(range, rng),
            Self::Bayesian(s) => s.next_guess(range, rng),
        }
    }

    fn kind(&self) -> StrategyKind {
        match self {
            Self::Blind(s) => s.kind(),
            Self::Binary(s) => s.kind(),
            Self::Bayesian(s) => s.kind(),
        }
    }
}

/// Blind feedback search
///
/// Guesses uniformly at random inside the live range. Expected guesses grow
/// like `2 ln N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlindSearch;

impl Strategy for BlindSearch {
    fn next_guess<R: Rng + ?Sized>(&self, range: Range, rng: &mut R) -> Result<u32, GameError> {
        Ok(rng.random_range(range.low()..=range.high()))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Blind
    }
}

/// Binary search
///
/// Always guesses the floor midpoint. Never needs more than
/// `floor(log2 N) + 1` guesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl Strategy for BinarySearch {
    fn next_guess<R: Rng + ?Sized>(&self, range: Range, _rng: &mut R) -> Result<u32, GameError> {
        // low + (high - low) / 2 == floor((low + high) / 2) without overflow
        Ok(range.low() + (range.high() - range.low()) / 2)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Binary
    }
}

/// Bayesian search
///
/// Guesses the probability-weighted median of the live range under the human
/// bias model. Optimal when targets really are drawn from that model; on
/// near-uniform stretches it behaves like binary search.
#[derive(Debug, Clone)]
pub struct BayesianSearch {
    model: BiasModel,
}

impl BayesianSearch {
    /// Build the bias model for games on `[1, limit]`
    ///
    /// # Errors
    /// Returns `GameError::InvalidLimit` when `limit` is zero.
    pub fn new(limit: u32) -> Result<Self, GameError> {
        Ok(Self::with_model(BiasModel::new(limit)?))
    }

    /// Reuse an existing model
    #[must_use]
    pub const fn with_model(model: BiasModel) -> Self {
        Self { model }
    }

    #[must_use]
    pub const fn model(&self) -> &BiasModel {
        &self.model
    }
}

impl Strategy for BayesianSearch {
    fn next_guess<R: Rng + ?Sized>(&self, range: Range, _rng: &mut R) -> Result<u32, GameError> {
        self.model.median(range).inspect_err(|e| {
            tracing::error!(error = %e, %range, "bias model has no usable mass in live range");
        })
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Bayesian
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn range(low: u32, high: u32, limit: u32) -> Range {
        // Walk a full range down to [low, high] through real feedback
        let mut r = Range::full(limit).unwrap();
        if low > 1 {
            r = r.narrow(low - 1, high).unwrap().0;
        }
        if high < limit {
            r = r.narrow(high + 1, low).unwrap().0;
        }
        assert_eq!((r.low(), r.high()), (low, high));
        r
    }

    #[test]
    fn strategy_names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.name()), Ok(kind));
        }
        assert_eq!(StrategyKind::from_name("random"), Ok(StrategyKind::Blind));
        assert_eq!(StrategyKind::from_name("Optimal"), Ok(StrategyKind::Binary));
        assert!(matches!(
            StrategyKind::from_name("entropy"),
            Err(GameError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn binary_guesses_floor_midpoint() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(BinarySearch.next_guess(range(1, 10, 10), &mut rng), Ok(5));
        assert_eq!(BinarySearch.next_guess(range(6, 10, 10), &mut rng), Ok(8));
        assert_eq!(BinarySearch.next_guess(range(6, 7, 10), &mut rng), Ok(6));
        assert_eq!(BinarySearch.next_guess(range(7, 7, 10), &mut rng), Ok(7));
    }

    #[test]
    fn binary_midpoint_does_not_overflow() {
        let mut rng = StdRng::seed_from_u64(0);
        let r = range(u32::MAX - 2, u32::MAX, u32::MAX);
        assert_eq!(BinarySearch.next_guess(r, &mut rng), Ok(u32::MAX - 1));
    }

    #[test]
    fn blind_guesses_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let r = range(40, 60, 100);
        for _ in 0..1_000 {
            let guess = BlindSearch.next_guess(r, &mut rng).unwrap();
            assert!(r.contains(guess));
        }
    }

    #[test]
    fn bayesian_guesses_weighted_median() {
        let mut rng = StdRng::seed_from_u64(0);
        let strategy = BayesianSearch::new(100).unwrap();

        let full = range(1, 100, 100);
        let guess = strategy.next_guess(full, &mut rng).unwrap();
        assert_eq!(Ok(guess), strategy.model().median(full));
        assert!(guess < 50);
    }

    #[test]
    fn bayesian_on_flat_stretch_matches_binary() {
        let mut rng = StdRng::seed_from_u64(0);
        let strategy = BayesianSearch::new(60).unwrap();
        let flat = range(45, 53, 60);

        assert_eq!(
            strategy.next_guess(flat, &mut rng),
            BinarySearch.next_guess(flat, &mut rng)
        );
    }

    #[test]
    fn bayesian_on_even_flat_stretch_of_large_limit_matches_binary() {
        let mut rng = StdRng::seed_from_u64(0);
        let strategy = BayesianSearch::new(1_000_000).unwrap();
        let flat = range(12_230, 12_263, 1_000_000);

        assert_eq!(strategy.next_guess(flat, &mut rng), Ok(12_246));
        assert_eq!(
            strategy.next_guess(flat, &mut rng),
            BinarySearch.next_guess(flat, &mut rng)
        );
    }

    #[test]
    fn bayesian_rejects_range_beyond_model() {
        let mut rng = StdRng::seed_from_u64(0);
        let strategy = BayesianSearch::new(10).unwrap();
        let err = strategy
            .next_guess(Range::full(50).unwrap(), &mut rng)
            .unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn build_matches_kind() {
        for kind in StrategyKind::ALL {
            let strategy = StrategyType::build(kind, 100).unwrap();
            assert_eq!(strategy.kind(), kind);
        }
        assert!(StrategyType::build(StrategyKind::Bayesian, 0).is_err());
    }
}
