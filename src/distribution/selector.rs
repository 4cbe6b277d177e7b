//! Target selection

use super::bias::BiasModel;
use crate::core::{GameError, TargetMode, validate_limit};
use rand::Rng;

/// Draw a hidden target in `[1, limit]`
///
/// Uniform mode draws every value with equal probability; biased mode builds
/// the bias model for `limit` and samples from it.
///
/// # Errors
/// Returns `GameError::InvalidLimit` when `limit` is zero.
///
/// # Examples
/// ```
/// use higher_lower::core::TargetMode;
/// use higher_lower::select_target;
///
/// let target = select_target(100, TargetMode::Biased, &mut rand::rng()).unwrap();
/// assert!((1..=100).contains(&target));
/// ```
pub fn select_target<R: Rng + ?Sized>(
    limit: u32,
    mode: TargetMode,
    rng: &mut R,
) -> Result<u32, GameError> {
    validate_limit(limit)?;

    match mode {
        TargetMode::Uniform => Ok(uniform_target(limit, rng)),
        TargetMode::Biased => Ok(BiasModel::new(limit)?.sample(rng)),
    }
}

/// Uniform draw from `[1, limit]`; `limit` must be at least 1
pub(crate) fn uniform_target<R: Rng + ?Sized>(limit: u32, rng: &mut R) -> u32 {
    rng.random_range(1..=limit)
}
