//! Colored terminal formatting for attempt rows
//!
//! Used by the simple CLI mode. Columns follow the canonical attribute
//! order; cell color encodes feedback (green = exact, yellow = case-only,
//! dim = miss).

use crate::core::{Boss, Feedback, FeedbackRow};
use colored::{ColoredString, Colorize};

const WIDTHS: [usize; 5] = [34, 28, 12, 12, 11];

/// Yes/No rendering of the remembrance attribute
#[inline]
#[must_use]
pub const fn bool_text(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// The column header line
#[must_use]
pub fn header_line() -> String {
    FeedbackRow::HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(header, width)| format!("{header:<width$}"))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// One attempt as a colored line of fixed-width cells
#[must_use]
pub fn attempt_line(boss: &Boss, row: &FeedbackRow) -> String {
    let values = [
        boss.name.as_str(),
        boss.region.as_str(),
        boss.kind.as_str(),
        boss.damage.as_str(),
        bool_text(boss.remembrance),
    ];

    let mut line = String::new();
    for ((value, feedback), width) in values.iter().zip(row.cells()).zip(WIDTHS) {
        let cell = format!("{value:<width$}");
        line.push_str(&colorize(&cell, feedback).to_string());
    }
    line.trim_end().to_string()
}

fn colorize(text: &str, feedback: Feedback) -> ColoredString {
    match feedback {
        Feedback::Match => text.green().bold(),
        Feedback::Partial => text.yellow(),
        Feedback::Miss => text.dimmed(),
    }
}
