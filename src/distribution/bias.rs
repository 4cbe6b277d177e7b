//! Human number-picking bias model
//!
//! People asked to "pick a random number" favour years, dates, small numbers
//! and memorable patterns, and shy away from round numbers. The model starts
//! from a flat weight of 1.0 per value and applies a fixed sequence of
//! multiplicative rules before normalising.
//!
//! Rule order is part of the model: overlapping rules compound, so reordering
//! them changes the output distribution.

use super::cumulative::{locate, prefix_sums};
use crate::core::{GameError, Range, validate_limit};
use rand::Rng;
use std::ops::RangeInclusive;

/// Last year treated as a plausible "recent year" pick
pub const CURRENT_YEAR: u32 = 2025;

/// Years people tend to pick (birth years, recent events)
pub const YEAR_WINDOW: RangeInclusive<u32> = 1950..=CURRENT_YEAR;
pub const YEAR_BOOST: f64 = 8.0;

/// Values shaped like MMDD dates (101 = Jan 1st, 1231 = Dec 31st)
pub const DATE_WINDOW: RangeInclusive<u32> = 101..=1231;
pub const DATE_BOOST: f64 = 3.0;

/// Day-of-month values
pub const LOW_WINDOW: RangeInclusive<u32> = 1..=31;
pub const LOW_BOOST: f64 = 4.0;

pub const PATTERN_BOOST: f64 = 5.0;

pub const THOUSAND_PENALTY: f64 = 0.1;
pub const HUNDRED_PENALTY: f64 = 0.3;

/// Memorable values: lucky numbers, repdigits, runs and pop-culture picks
pub const PATTERN_NUMBERS: &[u32] = &[
    3, 7, 11, 13, 17, 21, 22, 23, 33, 37, 42, 44, 55, 66, 69, 73, 77, 88, 99, 101, 111, 123, 222,
    234, 314, 321, 333, 345, 404, 420, 444, 456, 555, 567, 666, 678, 777, 789, 808, 888, 911, 987,
    999, 1111, 1234, 1337, 2222, 2345, 3333, 3456, 4321, 4444, 5555, 6666, 6969, 7777, 8008, 8888,
    9876, 9999, 11111, 12345, 22222, 33333, 44444, 54321, 55555, 66666, 77777, 88888, 99999,
    111_111, 123_456, 654_321, 777_777, 999_999, 1_234_567, 7_654_321,
];

/// Multiply every weight whose value falls in `window` by `factor`
///
/// `weights[v]` belongs to value `v`; slot 0 is unused. Windows reaching past
/// the limit are clipped, windows entirely past it are skipped.
fn scale_window(weights: &mut [f64], window: RangeInclusive<u32>, factor: f64) {
    let limit = weights.len().saturating_sub(1);
    let start = (*window.start() as usize).max(1);
    let end = (*window.end() as usize).min(limit);
    if start > end {
        return;
    }
    for w in &mut weights[start..=end] {
        *w *= factor;
    }
}

/// Raw (unnormalised) weights, indexed by value, slot 0 unused
pub(crate) fn human_weights(limit: u32) -> Vec<f64> {
    let n = limit as usize;
    let mut weights = vec![1.0; n + 1];
    weights[0] = 0.0;

    scale_window(&mut weights, YEAR_WINDOW, YEAR_BOOST);
    scale_window(&mut weights, DATE_WINDOW, DATE_BOOST);
    scale_window(&mut weights, LOW_WINDOW, LOW_BOOST);

    for &value in PATTERN_NUMBERS {
        if let Some(w) = weights.get_mut(value as usize) {
            *w *= PATTERN_BOOST;
        }
    }

    for value in (100..=n).step_by(100) {
        weights[value] *= if value % 1000 == 0 {
            THOUSAND_PENALTY
        } else {
            HUNDRED_PENALTY
        };
    }

    weights
}

/// Probability of picking each value in `[1, limit]` under the bias model
///
/// Entry `i` is the probability of value `i + 1`. The vector is rebuilt on
/// every call and depends on nothing but `limit`.
///
/// # Errors
/// Returns `GameError::InvalidLimit` when `limit` is zero.
///
/// # Examples
/// ```
/// use higher_lower::generate_bias_distribution;
///
/// let probs = generate_bias_distribution(100).unwrap();
/// assert_eq!(probs.len(), 100);
/// assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// assert!(probs[41] > probs[40]); // 42 beats 41
/// ```
pub fn generate_bias_distribution(limit: u32) -> Result<Vec<f64>, GameError> {
    validate_limit(limit)?;
    Ok(normalise(&human_weights(limit)))
}

fn normalise(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights[1..].iter().sum();
    weights[1..].iter().map(|w| w / total).collect()
}

/// Bias distribution with cumulative sums for repeated lookups
///
/// Building one is a single pass over the limit; a batch of games on the
/// same limit can share one model.
#[derive(Debug, Clone)]
pub struct BiasModel {
    // Raw rule weights by value, slot 0 unused
    weights: Vec<f64>,
    probabilities: Vec<f64>,
    // cumulative[v] = P(1..=v), cumulative[0] = 0
    cumulative: Vec<f64>,
}

impl BiasModel {
    /// Build the model for `[1, limit]`
    ///
    /// # Errors
    /// Returns `GameError::InvalidLimit` when `limit` is zero.
    pub fn new(limit: u32) -> Result<Self, GameError> {
        validate_limit(limit)?;
        let weights = human_weights(limit);
        let probabilities = normalise(&weights);
        let cumulative = prefix_sums(&probabilities);
        Ok(Self {
            weights,
            probabilities,
            cumulative,
        })
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.probabilities.len() as u32
    }

    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Probability of a single value, zero outside `[1, limit]`
    #[must_use]
    pub fn probability(&self, value: u32) -> f64 {
        value
            .checked_sub(1)
            .and_then(|i| self.probabilities.get(i as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Total probability of the values in `range`
    #[must_use]
    pub fn mass(&self, range: Range) -> f64 {
        let high = (range.high() as usize).min(self.probabilities.len());
        let low = range.low() as usize;
        if low > high {
            return 0.0;
        }
        self.cumulative[high] - self.cumulative[low - 1]
    }

    /// Probability-weighted median of `range`
    ///
    /// The smallest value in the range at which the distribution restricted
    /// to the range and renormalised accumulates at least half its mass.
    ///
    /// Mass is summed from the raw weights starting at `range.low()`, so on a
    /// flat stretch every partial sum is an exact integer and the half-way tie
    /// lands on the floor midpoint.
    ///
    /// # Errors
    /// Returns `GameError::DegenerateBias` if the range lies beyond the model
    /// or carries no probability mass.
    pub fn median(&self, range: Range) -> Result<u32, GameError> {
        let degenerate = GameError::DegenerateBias {
            low: range.low(),
            high: range.high(),
        };

        if range.high() > self.limit() {
            return Err(degenerate);
        }

        let live = &self.weights[range.low() as usize..=range.high() as usize];
        let running = prefix_sums(live);
        let total = running[running.len() - 1];
        if !(total.is_finite() && total > 0.0) {
            return Err(degenerate);
        }

        let offset = locate(&running[1..], 0.5 * total);
        Ok(range.low() + offset as u32)
    }

    /// Draw one value in `[1, limit]` with the model's probabilities
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let total = self.cumulative[self.cumulative.len() - 1];
        let threshold = rng.random::<f64>() * total;
        let idx = locate(&self.cumulative[1..], threshold);
        idx as u32 + 1
    }

    /// The `k` most likely values, most likely first
    #[must_use]
    pub fn peaks(&self, k: usize) -> Vec<(u32, f64)> {
        let mut ranked: Vec<(u32, f64)> = self
            .probabilities
            .iter()
            .enumerate()
            .map(|(i, &p)| (i as u32 + 1, p))
            .collect();
        ranked.sort_by(|(va, pa), (vb, pb)| pb.total_cmp(pa).then(va.cmp(vb)));
        ranked.truncate(k);
        ranked
    }
}
