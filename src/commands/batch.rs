//! Batch simulation plumbing shared by the commands
//!
//! Games run in parallel on rayon's pool. Each game gets its own `StdRng`
//! seeded from `seed + game_index`, so results do not depend on scheduling
//! and a seeded run replays exactly.

use crate::core::{GameError, GameResult};
use crate::solver::{Strategy, StrategyKind, play};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Settings for a batch of games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub limit: u32,
    pub games: usize,
    /// Base seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(limit: u32, games: usize) -> Self {
        Self {
            limit,
            games,
            seed: None,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// The seed this batch will actually use
    #[must_use]
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(10_000, 1_000)
    }
}

/// Independent random stream for one game of a batch
#[must_use]
pub fn game_rng(base_seed: u64, game_index: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(game_index as u64))
}

pub(crate) fn progress_bar(len: usize, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    // Template is static; fall back to the default style if it ever fails to parse
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb.set_message(label.to_string());
    pb
}

/// Play `config.games` games of `strategy`
///
/// `target_for` picks each game's target from that game's own stream
/// (`None` lets the runner draw a uniform target).
///
/// # Errors
/// Returns the first engine error any game reports.
pub fn run_games<S, F>(
    strategy: &S,
    config: &SimulationConfig,
    target_for: F,
) -> Result<Vec<GameResult>, GameError>
where
    S: Strategy + Sync,
    F: Fn(&mut StdRng) -> Result<Option<u32>, GameError> + Sync,
{
    let seed = config.resolved_seed();
    tracing::info!(
        strategy = %strategy.kind(),
        limit = config.limit,
        games = config.games,
        seed,
        "starting batch"
    );

    let pb = config
        .show_progress
        .then(|| progress_bar(config.games, strategy.kind().name()));

    let results = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = game_rng(seed, i);
            let target = target_for(&mut rng)?;
            let result = play(strategy, config.limit, target, &mut rng);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            result
        })
        .collect::<Result<Vec<_>, _>>();

    if let Some(pb) = pb {
        pb.finish_with_message("Complete!");
    }

    results
}

/// Summary of a batch of finished games
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    pub games: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
}

impl BatchStatistics {
    /// Summarise guess counts; an empty batch has all-zero statistics
    #[must_use]
    pub fn from_results(results: &[GameResult]) -> Self {
        Self::from_counts(results.iter().map(GameResult::count))
    }

    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = usize>) -> Self {
        let mut games = 0;
        let mut total_guesses = 0;
        let mut min_guesses = usize::MAX;
        let mut max_guesses = 0;
        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

        for count in counts {
            games += 1;
            total_guesses += count;
            min_guesses = min_guesses.min(count);
            max_guesses = max_guesses.max(count);
            *distribution.entry(count).or_insert(0) += 1;
        }

        let average_guesses = if games > 0 {
            total_guesses as f64 / games as f64
        } else {
            0.0
        };

        Self {
            games,
            total_guesses,
            average_guesses,
            min_guesses: if games > 0 { min_guesses } else { 0 },
            max_guesses,
            distribution,
        }
    }

    /// Distribution as sorted `(guesses, games)` pairs
    #[must_use]
    pub fn sorted_distribution(&self) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> =
            self.distribution.iter().map(|(&k, &v)| (k, v)).collect();
        pairs.sort_unstable();
        pairs
    }
}

/// Closed-form reference for a strategy's mean guess count under uniform
/// targets, if one is known
#[must_use]
pub fn theoretical_average(kind: StrategyKind, limit: u32) -> Option<f64> {
    let n = f64::from(limit);
    match kind {
        StrategyKind::Blind => Some(2.0 * n.ln()),
        StrategyKind::Binary => Some(n.log2()),
        StrategyKind::Bayesian => None,
    }
}
