//! Game runner
//!
//! Drives one strategy against one hidden target until it guesses it.

use super::strategy::{BayesianSearch, BinarySearch, BlindSearch, Strategy};
use crate::core::{Feedback, GameError, GameResult, Range, validate_limit, validate_target};
use crate::distribution::uniform_target;
use rand::Rng;

/// Play one game on `[1, limit]`
///
/// Uses `target` when given, otherwise draws a uniform target. Every guess,
/// including the final correct one, is recorded. The live range loses at
/// least one value per miss and always contains the target, so the loop
/// ends after at most `limit` guesses.
///
/// # Errors
/// - `GameError::InvalidLimit` / `GameError::TargetOutOfRange` for bad input
/// - `GameError::RangeInvariant` if the strategy guesses outside the range
/// - any error the strategy itself reports
pub fn play<S: Strategy, R: Rng + ?Sized>(
    strategy: &S,
    limit: u32,
    target: Option<u32>,
    rng: &mut R,
) -> Result<GameResult, GameError> {
    validate_limit(limit)?;
    let target = match target {
        Some(t) => validate_target(t, limit)?,
        None => uniform_target(limit, rng),
    };

    let mut range = Range::full(limit)?;
    let mut history = Vec::new();

    loop {
        let guess = strategy.next_guess(range, rng)?;
        history.push(guess);

        let (next, feedback) = range.narrow(guess, target).inspect_err(|e| {
            tracing::error!(strategy = %strategy.kind(), error = %e, "guess left the live range");
        })?;
        tracing::trace!(guess, low = next.low(), high = next.high(), ?feedback);

        if feedback == Feedback::Correct {
            break;
        }
        range = next;
    }

    tracing::debug!(
        strategy = %strategy.kind(),
        limit,
        target,
        count = history.len(),
        "game finished"
    );

    Ok(GameResult::new(target, history, limit))
}

/// Play one game of blind (uniform random) search
///
/// # Errors
/// Rejects `limit == 0` and targets outside `[1, limit]`.
///
/// # Examples
/// ```
/// use higher_lower::run_blind_search;
///
/// let result = run_blind_search(100, Some(42), &mut rand::rng()).unwrap();
/// assert_eq!(result.history().last(), Some(&42));
/// ```
pub fn run_blind_search<R: Rng + ?Sized>(
    limit: u32,
    target: Option<u32>,
    rng: &mut R,
) -> Result<GameResult, GameError> {
    play(&BlindSearch, limit, target, rng)
}

/// Play one game of binary search
///
/// # Errors
/// Rejects `limit == 0` and targets outside `[1, limit]`.
///
/// # Examples
/// ```
/// use higher_lower::run_binary_search;
///
/// let result = run_binary_search(10, Some(7), &mut rand::rng()).unwrap();
/// assert_eq!(result.history(), &[5, 8, 6, 7]);
/// ```
pub fn run_binary_search<R: Rng + ?Sized>(
    limit: u32,
    target: Option<u32>,
    rng: &mut R,
) -> Result<GameResult, GameError> {
    play(&BinarySearch, limit, target, rng)
}

/// Play one game of Bayesian search
///
/// Builds the bias model for `limit` afresh. Batch callers that play many
/// games on one limit should build a `BayesianSearch` once and call [`play`].
///
/// # Errors
/// Rejects `limit == 0` and targets outside `[1, limit]`.
pub fn run_bayesian_search<R: Rng + ?Sized>(
    limit: u32,
    target: Option<u32>,
    rng: &mut R,
) -> Result<GameResult, GameError> {
    validate_limit(limit)?;
    if let Some(t) = target {
        validate_target(t, limit)?;
    }
    play(&BayesianSearch::new(limit)?, limit, target, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{StrategyKind, StrategyType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_strategies(limit: u32) -> Vec<StrategyType> {
        StrategyKind::ALL
            .into_iter()
            .map(|kind| StrategyType::build(kind, limit).unwrap())
            .collect()
    }

    fn check_result(result: &GameResult, limit: u32) {
        assert!((1..=limit).contains(&result.target()));
        assert_eq!(result.limit(), limit);
        assert!(result.count() >= 1);
        assert_eq!(result.count(), result.history().len());
        assert_eq!(result.history().last(), Some(&result.target()));
        // The target is guessed exactly once, at the end
        assert_eq!(
            result.history().iter().filter(|&&g| g == result.target()).count(),
            1
        );
    }

    /// Replays a history and checks each guess was inside a shrinking range
    fn check_shrinking(result: &GameResult) {
        let mut range = Range::full(result.limit()).unwrap();
        for &guess in result.history() {
            let before = range.span();
            let (next, feedback) = range.narrow(guess, result.target()).unwrap();
            if feedback != Feedback::Correct {
                assert!(next.span() < before);
                assert!(next.low() >= range.low() && next.high() <= range.high());
            }
            range = next;
        }
    }

    #[test]
    fn binary_search_known_trace() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = run_binary_search(10, Some(7), &mut rng).unwrap();

        assert_eq!(result.history(), &[5, 8, 6, 7]);
        assert_eq!(result.count(), 4);
        assert_eq!(result.target(), 7);
    }

    #[test]
    fn limit_one_takes_one_guess() {
        let mut rng = StdRng::seed_from_u64(1);
        for strategy in all_strategies(1) {
            for target in [None, Some(1)] {
                let result = play(&strategy, 1, target, &mut rng).unwrap();
                assert_eq!(result.history(), &[1]);
                assert_eq!(result.count(), 1);
            }
        }
    }

    #[test]
    fn invalid_input_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2);

        assert_eq!(
            run_blind_search(0, None, &mut rng),
            Err(GameError::InvalidLimit { limit: 0 })
        );
        assert_eq!(
            run_binary_search(10, Some(0), &mut rng),
            Err(GameError::TargetOutOfRange {
                target: 0,
                limit: 10
            })
        );
        assert_eq!(
            run_bayesian_search(10, Some(11), &mut rng),
            Err(GameError::TargetOutOfRange {
                target: 11,
                limit: 10
            })
        );
        assert_eq!(
            run_bayesian_search(0, None, &mut rng),
            Err(GameError::InvalidLimit { limit: 0 })
        );
    }

    #[test]
    fn every_strategy_finds_every_target() {
        let mut rng = StdRng::seed_from_u64(3);
        let limit = 137;
        for strategy in all_strategies(limit) {
            for target in 1..=limit {
                let result = play(&strategy, limit, Some(target), &mut rng).unwrap();
                check_result(&result, limit);
                check_shrinking(&result);
                assert_eq!(result.target(), target);
            }
        }
    }

    #[test]
    fn random_targets_produce_valid_games() {
        let mut rng = StdRng::seed_from_u64(4);
        for limit in [2, 3, 10, 100, 1_000, 2_500] {
            for strategy in all_strategies(limit) {
                for _ in 0..50 {
                    let result = play(&strategy, limit, None, &mut rng).unwrap();
                    check_result(&result, limit);
                    check_shrinking(&result);
                }
            }
        }
    }

    #[test]
    fn binary_search_worst_case_is_logarithmic() {
        let mut rng = StdRng::seed_from_u64(5);
        for limit in [1_u32, 2, 3, 4, 7, 8, 10, 64, 100, 1000, 1024] {
            let bound = (limit.ilog2() + 1) as usize;
            let worst = (1..=limit)
                .map(|t| run_binary_search(limit, Some(t), &mut rng).unwrap().count())
                .max()
                .unwrap();

            assert_eq!(worst, bound, "limit {limit}");
        }
    }

    #[test]
    fn binary_search_at_100_never_exceeds_seven() {
        let mut rng = StdRng::seed_from_u64(6);
        for target in 1..=100 {
            let result = run_binary_search(100, Some(target), &mut rng).unwrap();
            assert!(result.count() <= 7);
        }
    }

    #[test]
    fn binary_search_ignores_rng() {
        let a = run_binary_search(1000, Some(321), &mut StdRng::seed_from_u64(1)).unwrap();
        let b = run_binary_search(1000, Some(321), &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bayesian_search_is_deterministic_for_fixed_target() {
        let a = run_bayesian_search(5000, Some(1987), &mut StdRng::seed_from_u64(1)).unwrap();
        let b = run_bayesian_search(5000, Some(1987), &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_blind_games_replay() {
        let a = run_blind_search(10_000, None, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = run_blind_search(10_000, None, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn blind_mean_tracks_two_ln_n() {
        let mut rng = StdRng::seed_from_u64(7);
        let limit = 1000_u32;
        let trials = 5_000;

        let total: usize = (0..trials)
            .map(|_| run_blind_search(limit, None, &mut rng).unwrap().count())
            .sum();
        let mean = total as f64 / f64::from(trials);

        // Exact expectation for a uniform target: 2(1 + 1/N) H_N - 3
        let n = f64::from(limit);
        let harmonic: f64 = (1..=limit).map(|k| 1.0 / f64::from(k)).sum();
        let exact = 2.0 * (1.0 + 1.0 / n) * harmonic - 3.0;
        assert!((mean - exact).abs() / exact < 0.03, "mean {mean}, exact {exact}");

        // 2 ln N overshoots by the -3 and Euler-Mascheroni terms
        let asymptotic = 2.0 * n.ln();
        let ratio = mean / asymptotic;
        assert!((0.8..1.0).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn binary_mean_tracks_log2_n() {
        let mut rng = StdRng::seed_from_u64(8);
        let limit = 1000_u32;
        let trials = 5_000;

        let total: usize = (0..trials)
            .map(|_| run_binary_search(limit, None, &mut rng).unwrap().count())
            .sum();
        let mean = total as f64 / f64::from(trials);
        let log2 = f64::from(limit).log2();

        assert!(mean <= log2, "mean {mean}");
        assert!(log2 - mean < 1.5, "mean {mean}, log2 {log2}");
    }

    #[test]
    fn bayesian_beats_binary_on_biased_targets() {
        use crate::core::TargetMode;
        use crate::distribution::select_target;

        let mut rng = StdRng::seed_from_u64(9);
        let limit = 2_500;
        let bayesian = BayesianSearch::new(limit).unwrap();

        let (mut bayes_total, mut binary_total) = (0, 0);
        for _ in 0..3_000 {
            let target = select_target(limit, TargetMode::Biased, &mut rng).unwrap();
            bayes_total += play(&bayesian, limit, Some(target), &mut rng).unwrap().count();
            binary_total += run_binary_search(limit, Some(target), &mut rng)
                .unwrap()
                .count();
        }

        assert!(bayes_total < binary_total, "{bayes_total} vs {binary_total}");
    }
}
