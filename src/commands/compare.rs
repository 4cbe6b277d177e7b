//! Head-to-head comparison of blind and binary search across limits

use super::batch::{BatchStatistics, SimulationConfig, run_games};
use crate::core::GameError;
use crate::solver::{BinarySearch, BlindSearch};

/// Limits compared by default, one per order of magnitude
pub const DEFAULT_LIMITS: &[u32] = &[100, 1_000, 10_000, 100_000, 1_000_000];

/// One row of the scoreboard
#[derive(Debug, Clone, PartialEq)]
pub struct CompareRow {
    pub limit: u32,
    pub blind_average: f64,
    pub binary_average: f64,
    pub theory_log2: f64,
    pub theory_two_ln: f64,
}

impl CompareRow {
    /// How many times more guesses blind search needs than binary search
    #[must_use]
    pub fn blind_overhead(&self) -> f64 {
        if self.binary_average > 0.0 {
            self.blind_average / self.binary_average
        } else {
            0.0
        }
    }
}

/// Play `games` uniform-target games of each strategy at every limit
///
/// # Errors
/// Returns `GameError::InvalidLimit` if any limit is zero.
pub fn run_compare(
    limits: &[u32],
    games: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<Vec<CompareRow>, GameError> {
    limits
        .iter()
        .map(|&limit| {
            let config = SimulationConfig::new(limit, games)
                .with_seed(seed)
                .with_progress(show_progress);

            let blind = run_games(&BlindSearch, &config, |_| Ok(None))?;
            let binary = run_games(&BinarySearch, &config, |_| Ok(None))?;
            let n = f64::from(limit);

            Ok(CompareRow {
                limit,
                blind_average: BatchStatistics::from_results(&blind).average_guesses,
                binary_average: BatchStatistics::from_results(&binary).average_guesses,
                theory_log2: n.log2(),
                theory_two_ln: 2.0 * n.ln(),
            })
        })
        .collect()
}
