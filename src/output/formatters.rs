//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Arrow and label for a guess's feedback
#[must_use]
pub const fn feedback_label(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::TooHigh => "▼ too high",
        Feedback::TooLow => "▲ too low",
        Feedback::Correct => "● correct",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing where `value` sits inside `[1, limit]`
#[must_use]
pub fn position_bar(value: u32, limit: u32, width: usize) -> String {
    create_progress_bar(f64::from(value), f64::from(limit), width)
}

/// Format a probability as a percentage with adaptive precision
#[must_use]
pub fn format_probability(p: f64) -> String {
    let pct = p * 100.0;
    if pct >= 1.0 {
        format!("{pct:.2}%")
    } else {
        format!("{pct:.4}%")
    }
}
