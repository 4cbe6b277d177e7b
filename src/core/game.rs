//! Completed game records

use std::fmt;

/// How the hidden target is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    /// Every value in `[1, limit]` is equally likely
    #[default]
    Uniform,
    /// Drawn from the human bias distribution
    Biased,
}

impl TargetMode {
    /// Parse a mode name ("uniform"/"random" or "biased"/"human")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "uniform" | "random" => Some(Self::Uniform),
            "biased" | "human" => Some(Self::Biased),
            _ => None,
        }
    }
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Biased => write!(f, "biased"),
        }
    }
}

/// Outcome of one finished game
///
/// Built only by the game runner. The guess history is in the order the
/// guesses were made and always ends with the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    target: u32,
    history: Vec<u32>,
    limit: u32,
}

impl GameResult {
    pub(crate) const fn new(target: u32, history: Vec<u32>, limit: u32) -> Self {
        Self {
            target,
            history,
            limit,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Number of guesses made, including the correct one
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Upper bound `N` the game was played on
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}
