//! Core domain types for the guessing game
//!
//! Ranges, feedback, finished-game records and the engine error type.
//! Nothing here touches randomness.

mod error;
mod game;
mod range;

pub use error::{GameError, validate_limit, validate_target};
pub use game::{GameResult, TargetMode};
pub use range::{Feedback, Range};
