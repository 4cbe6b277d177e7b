//! Benchmark command
//!
//! Plays many games of one strategy on one limit and summarises them.

use super::batch::{BatchStatistics, SimulationConfig, run_games, theoretical_average};
use super::play::{PlayOutcome, replay_steps};
use crate::core::{GameError, GameResult, TargetMode};
use crate::distribution::BiasModel;
use crate::solver::{BayesianSearch, Strategy, StrategyKind, StrategyType};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: StrategyKind,
    pub mode: TargetMode,
    pub limit: u32,
    pub stats: BatchStatistics,
    /// First game of the batch that needed the most guesses
    pub worst_game: Option<GameResult>,
    /// Closed-form reference mean under uniform targets, if known
    pub theoretical: Option<f64>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    /// Guess-by-guess replay of the unluckiest game, if the batch had any
    ///
    /// # Errors
    /// Returns `GameError::RangeInvariant` if the stored history is not a
    /// valid game.
    pub fn worst_outcome(&self) -> Result<Option<PlayOutcome>, GameError> {
        self.worst_game
            .as_ref()
            .map(|game| {
                Ok(PlayOutcome {
                    strategy: self.strategy,
                    mode: self.mode,
                    result: game.clone(),
                    steps: replay_steps(game)?,
                })
            })
            .transpose()
    }
}

/// Run a benchmark of `kind` with targets drawn per `mode`
///
/// The bias model is built once and shared by every game of the batch.
///
/// # Errors
/// Returns `GameError::InvalidLimit` for a zero limit; any other error means
/// an engine invariant broke.
pub fn run_benchmark(
    kind: StrategyKind,
    mode: TargetMode,
    config: &SimulationConfig,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let model = match (kind, mode) {
        (StrategyKind::Bayesian, _) | (_, TargetMode::Biased) => {
            Some(BiasModel::new(config.limit)?)
        }
        _ => None,
    };
    let strategy = match (kind, &model) {
        (StrategyKind::Bayesian, Some(m)) => {
            StrategyType::Bayesian(BayesianSearch::with_model(m.clone()))
        }
        _ => StrategyType::build(kind, config.limit)?,
    };

    let results = match (mode, &model) {
        (TargetMode::Biased, Some(m)) => {
            run_games(&strategy, config, |rng| Ok(Some(m.sample(rng))))?
        }
        _ => run_games(&strategy, config, |_| Ok(None))?,
    };

    let duration = start.elapsed();
    let stats = BatchStatistics::from_results(&results);
    let worst_game = unluckiest(results);

    Ok(BenchmarkResult {
        strategy: strategy.kind(),
        mode,
        limit: config.limit,
        games_per_second: stats.games as f64 / duration.as_secs_f64(),
        stats,
        worst_game,
        theoretical: match mode {
            TargetMode::Uniform => theoretical_average(kind, config.limit),
            TargetMode::Biased => None,
        },
        duration,
    })
}

/// The game with the highest guess count; ties keep the earliest game
fn unluckiest(results: Vec<GameResult>) -> Option<GameResult> {
    results
        .into_iter()
        .reduce(|worst, game| if game.count() > worst.count() { game } else { worst })
}
