//! Canonical shareable-result text
//!
//! The share block is pure text: a header line and one glyph row per
//! attempt. A cell is filled only where the raw attribute values are exactly
//! equal; the case-insensitive `Partial` tier renders as empty, the same as
//! a miss.

use crate::core::{Boss, FeedbackRow};
use crate::session::MAX_ATTEMPTS;
use std::fmt::Write;

/// Fixed game label used in the header and day display
pub const GAME_LABEL: &str = "Bossdle";

const FILLED: char = '🟩';
const EMPTY: char = '⬛';

/// Day display label, e.g. `Bossdle 042`
#[must_use]
pub fn day_label(day_index: i64) -> String {
    format!("{GAME_LABEL} {:03}", day_index + 1)
}

/// Encode a finished puzzle into its shareable text block
///
/// Header: `Bossdle 042 3/6` on a win (attempt count) or `Bossdle 042 X/6`
/// on a loss. Body: one line per attempt, five glyphs in canonical attribute
/// order.
///
/// # Examples
/// ```
/// use bossdle::core::Boss;
/// use bossdle::output::share::encode;
///
/// let target = Boss {
///     name: "Fire Giant".into(),
///     region: "Mountaintops of the Giants".into(),
///     kind: "Giant".into(),
///     damage: "Fire".into(),
///     remembrance: true,
///     alias: None,
/// };
/// let text = encode(41, &[target.clone()], &target, true);
/// assert_eq!(text, "Bossdle 042 1/6\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn encode(day_index: i64, attempts: &[Boss], target: &Boss, won: bool) -> String {
    let mut out = String::new();

    if won {
        let _ = write!(out, "{} {}/{MAX_ATTEMPTS}", day_label(day_index), attempts.len());
    } else {
        let _ = write!(out, "{} X/{MAX_ATTEMPTS}", day_label(day_index));
    }

    for attempt in attempts {
        out.push('\n');
        out.push_str(&glyph_row(attempt, target));
    }

    out
}

/// One attempt's glyph row in canonical attribute order
#[must_use]
pub fn glyph_row(attempt: &Boss, target: &Boss) -> String {
    FeedbackRow::evaluate(attempt, target)
        .cells()
        .iter()
        .map(|cell| if cell.is_exact() { FILLED } else { EMPTY })
        .collect()
}
