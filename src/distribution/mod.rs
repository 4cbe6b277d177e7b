//! Target distributions
//!
//! The human bias model, the cumulative-mass lookup it shares with Bayesian
//! search, and target selection.

pub mod bias;
mod cumulative;
mod selector;

pub use bias::{BiasModel, generate_bias_distribution};
pub use cumulative::{locate, prefix_sums};
pub use selector::select_target;
pub(crate) use selector::uniform_target;
