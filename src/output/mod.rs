//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_compare_rows, print_play_outcome, print_scaling_rows,
    print_showdown_result,
};
