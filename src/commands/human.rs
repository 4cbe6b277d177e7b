//! Strategy showdown against a human-biased opponent
//!
//! Every round draws one target from the bias model and scores blind,
//! binary and Bayesian search against it.

use super::batch::{BatchStatistics, game_rng, progress_bar};
use crate::core::{GameError, validate_limit};
use crate::distribution::BiasModel;
use crate::solver::{BayesianSearch, compare_on_model, play};
use rand::Rng;
use rayon::prelude::*;

/// Number of bias peaks reported by default
pub const DEFAULT_PEAKS: usize = 10;

/// Result of a showdown
pub struct ShowdownResult {
    pub limit: u32,
    pub rounds: usize,
    /// Most likely targets under the bias model
    pub peaks: Vec<(u32, f64)>,
    pub random: BatchStatistics,
    pub optimal: BatchStatistics,
    pub bayesian: BatchStatistics,
    /// Rounds where Bayesian search needed fewer guesses than binary search
    pub bayesian_wins: usize,
    /// Rounds where binary search needed fewer guesses than Bayesian search
    pub binary_wins: usize,
}

/// Run `rounds` rounds on `[1, limit]`
///
/// # Errors
/// Returns `GameError::InvalidLimit` when `limit` is zero.
pub fn run_showdown(
    limit: u32,
    rounds: usize,
    peaks: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<ShowdownResult, GameError> {
    validate_limit(limit)?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(limit, rounds, seed, "starting human showdown");

    let model = BiasModel::new(limit)?;
    let bayesian = BayesianSearch::with_model(model.clone());
    let pb = show_progress.then(|| progress_bar(rounds, "showdown"));

    let scores = (0..rounds)
        .into_par_iter()
        .map(|i| -> Result<(usize, usize, usize), GameError> {
            let mut rng = game_rng(seed, i);
            let duel = compare_on_model(&model, &mut rng)?;
            let bayes = play(&bayesian, limit, Some(duel.target()), &mut rng)?;
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            Ok((duel.random.count(), duel.optimal.count(), bayes.count()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(pb) = pb {
        pb.finish_with_message("Complete!");
    }

    let bayesian_wins = scores.iter().filter(|(_, bin, bay)| bay < bin).count();
    let binary_wins = scores.iter().filter(|(_, bin, bay)| bin < bay).count();

    Ok(ShowdownResult {
        limit,
        rounds,
        peaks: model.peaks(peaks),
        random: BatchStatistics::from_counts(scores.iter().map(|s| s.0)),
        optimal: BatchStatistics::from_counts(scores.iter().map(|s| s.1)),
        bayesian: BatchStatistics::from_counts(scores.iter().map(|s| s.2)),
        bayesian_wins,
        binary_wins,
    })
}
