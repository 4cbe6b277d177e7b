//! Head-to-head play against a "human" opponent

use super::engine::play;
use super::strategy::{BinarySearch, BlindSearch};
use crate::core::{GameError, GameResult, validate_limit};
use crate::distribution::BiasModel;
use rand::Rng;

/// Blind and binary search scored against the same biased target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanComparison {
    /// Blind feedback search
    pub random: GameResult,
    /// Binary search
    pub optimal: GameResult,
}

impl HumanComparison {
    /// The target both games were played against
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.random.target()
    }
}

/// Draw one target from the bias model and play blind and binary search on it
///
/// # Errors
/// Returns `GameError::InvalidLimit` when `limit` is zero.
///
/// # Examples
/// ```
/// use higher_lower::run_human_comparison;
///
/// let duel = run_human_comparison(100, &mut rand::rng()).unwrap();
/// assert_eq!(duel.random.target(), duel.optimal.target());
/// ```
pub fn run_human_comparison<R: Rng + ?Sized>(
    limit: u32,
    rng: &mut R,
) -> Result<HumanComparison, GameError> {
    validate_limit(limit)?;
    let model = BiasModel::new(limit)?;
    compare_on_model(&model, rng)
}

/// Same as [`run_human_comparison`] with a prebuilt model
///
/// # Errors
/// Only fails if the model is inconsistent with its own limit.
pub fn compare_on_model<R: Rng + ?Sized>(
    model: &BiasModel,
    rng: &mut R,
) -> Result<HumanComparison, GameError> {
    let limit = model.limit();
    let target = model.sample(rng);

    Ok(HumanComparison {
        random: play(&BlindSearch, limit, Some(target), rng)?,
        optimal: play(&BinarySearch, limit, Some(target), rng)?,
    })
}
