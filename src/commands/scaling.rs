//! Convergence study of blind search
//!
//! Runs one large batch per limit and checks how the running mean approaches
//! `2 ln N` as more games are included.

use super::batch::{SimulationConfig, run_games};
use crate::core::{GameError, GameResult};
use crate::solver::BlindSearch;

pub const DEFAULT_LIMITS: &[u32] = &[100, 1_000, 10_000, 100_000];
pub const DEFAULT_SIM_COUNTS: &[usize] = &[10, 50, 100, 500, 1_000, 5_000, 10_000, 20_000];

/// Mean over the first `simulations` games of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingRow {
    pub limit: u32,
    pub simulations: usize,
    pub average: f64,
    pub theoretical: f64,
    /// `average / theoretical`
    pub ratio: f64,
}

/// Run the study
///
/// Each limit plays `max(sim_counts)` games once; smaller counts are prefixes
/// of that batch, so every row for a limit shares its games.
///
/// # Errors
/// Returns `GameError::InvalidLimit` if any limit is zero.
pub fn run_scaling(
    limits: &[u32],
    sim_counts: &[usize],
    seed: Option<u64>,
    show_progress: bool,
) -> Result<Vec<ScalingRow>, GameError> {
    let max_sims = sim_counts.iter().copied().max().unwrap_or(0);
    let mut rows = Vec::with_capacity(limits.len() * sim_counts.len());

    for &limit in limits {
        let config = SimulationConfig::new(limit, max_sims)
            .with_seed(seed)
            .with_progress(show_progress);
        let counts: Vec<usize> = run_games(&BlindSearch, &config, |_| Ok(None))?
            .iter()
            .map(GameResult::count)
            .collect();

        let theoretical = 2.0 * f64::from(limit).ln();

        for &n in sim_counts {
            let subset = &counts[..n.min(counts.len())];
            let average = if subset.is_empty() {
                0.0
            } else {
                subset.iter().sum::<usize>() as f64 / subset.len() as f64
            };
            // ln 1 = 0; a one-value game has no meaningful ratio
            let ratio = if theoretical > 0.0 {
                average / theoretical
            } else {
                0.0
            };

            rows.push(ScalingRow {
                limit,
                simulations: n,
                average,
                theoretical,
                ratio,
            });
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_every_pair() {
        let rows = run_scaling(&[100, 1_000], &[10, 50, 100], Some(8), false).unwrap();

        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows.iter().map(|r| r.simulations).collect::<Vec<_>>(),
            vec![10, 50, 100, 10, 50, 100]
        );
    }

    #[test]
    fn large_sample_ratio_is_below_one() {
        // The exact mean, 2(1 + 1/N) H_N - 3, stays under 2 ln N
        let rows = run_scaling(&[1_000], &[5_000], Some(9), false).unwrap();
        let ratio = rows[0].ratio;
        assert!((0.8..1.0).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn limit_one_has_zero_ratio() {
        let rows = run_scaling(&[1], &[10], Some(1), false).unwrap();
        assert!((rows[0].average - 1.0).abs() < 1e-12);
        assert!(rows[0].ratio.abs() < f64::EPSILON);
    }

    #[test]
    fn no_sim_counts_no_rows() {
        let rows = run_scaling(&[100], &[], Some(1), false).unwrap();
        assert!(rows.is_empty());
    }
}
