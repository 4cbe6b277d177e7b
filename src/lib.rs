//! Higher or Lower
//!
//! Simulates the "higher or lower" number-guessing game under three search
//! strategies (blind, binary, Bayesian) and an optional human-like bias in
//! how the hidden number is picked.
//!
//! # Quick Start
//!
//! ```rust
//! use higher_lower::core::TargetMode;
//! use higher_lower::{run_bayesian_search, run_binary_search, select_target};
//!
//! let mut rng = rand::rng();
//! let target = select_target(1000, TargetMode::Biased, &mut rng).unwrap();
//!
//! let binary = run_binary_search(1000, Some(target), &mut rng).unwrap();
//! let bayesian = run_bayesian_search(1000, Some(target), &mut rng).unwrap();
//! println!("binary: {} guesses, bayesian: {}", binary.count(), bayesian.count());
//! ```

// Core domain types
pub mod core;

// Bias model and target selection
pub mod distribution;

// Search strategies and the game runner
pub mod solver;

// Batch simulations behind the CLI
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing set-up for the binary
pub mod logging;

pub use distribution::{generate_bias_distribution, select_target};
pub use solver::{
    run_bayesian_search, run_binary_search, run_blind_search, run_human_comparison,
};
