//! Search strategies and the game runner
//!
//! Three strategies share one contract: pick a guess inside the live range.
//! The runner feeds them feedback until they hit the target.

mod comparison;
mod engine;
pub mod strategy;

pub use comparison::{HumanComparison, compare_on_model, run_human_comparison};
pub use engine::{play, run_bayesian_search, run_binary_search, run_blind_search};
pub use strategy::{
    BayesianSearch, BinarySearch, BlindSearch, Strategy, StrategyKind, StrategyType,
};
