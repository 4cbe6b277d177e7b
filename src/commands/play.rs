//! Single game command
//!
//! Plays one game and keeps the per-guess feedback for display.

use crate::core::{Feedback, GameError, GameResult, Range, TargetMode};
use crate::distribution::select_target;
use crate::solver::{StrategyKind, StrategyType, play};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a single game
pub struct PlayConfig {
    pub limit: u32,
    pub strategy: StrategyKind,
    pub mode: TargetMode,
    /// Fixed target; overrides `mode`
    pub target: Option<u32>,
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(limit: u32, strategy: StrategyKind) -> Self {
        Self {
            limit,
            strategy,
            mode: TargetMode::Uniform,
            target: None,
            seed: None,
        }
    }
}

/// A single guess step in the game
pub struct GuessStep {
    pub guess: u32,
    pub feedback: Feedback,
    /// Live range before the guess
    pub range_before: Range,
}

/// Result of playing one game
pub struct PlayOutcome {
    pub strategy: StrategyKind,
    pub mode: TargetMode,
    pub result: GameResult,
    pub steps: Vec<GuessStep>,
}

/// Play one game as configured
///
/// # Errors
/// Returns an error for a zero limit or a fixed target outside `[1, limit]`.
pub fn play_single(config: &PlayConfig) -> Result<PlayOutcome, GameError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let target = match config.target {
        Some(t) => t,
        None => select_target(config.limit, config.mode, &mut rng)?,
    };

    let strategy = StrategyType::build(config.strategy, config.limit)?;
    let result = play(&strategy, config.limit, Some(target), &mut rng)?;
    let steps = replay_steps(&result)?;

    Ok(PlayOutcome {
        strategy: config.strategy,
        mode: config.mode,
        result,
        steps,
    })
}

/// Rebuild per-guess feedback and ranges from a finished game
///
/// # Errors
/// Returns `GameError::RangeInvariant` if the history is not a valid game.
pub fn replay_steps(result: &GameResult) -> Result<Vec<GuessStep>, GameError> {
    let mut range = Range::full(result.limit())?;
    let mut steps = Vec::with_capacity(result.count());

    for &guess in result.history() {
        let (next, feedback) = range.narrow(guess, result.target())?;
        steps.push(GuessStep {
            guess,
            feedback,
            range_before: range,
        });
        range = next;
    }

    Ok(steps)
}
