//! Command implementations
//!
//! Batch simulations that drive the engine for the CLI. The engine itself
//! never prints, spawns threads or reads configuration; all of that lives
//! here and in `output`.

pub mod batch;
pub mod benchmark;
pub mod compare;
pub mod human;
pub mod play;
pub mod scaling;

pub use batch::{BatchStatistics, SimulationConfig, run_games, theoretical_average};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use compare::{CompareRow, run_compare};
pub use human::{ShowdownResult, run_showdown};
pub use play::{GuessStep, PlayConfig, PlayOutcome, play_single, replay_steps};
pub use scaling::{ScalingRow, run_scaling};
