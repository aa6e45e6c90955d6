//! Per-attribute guess feedback
//!
//! Comparing a guess against the target yields one `Feedback` per attribute:
//! - `Match`: raw values exactly equal
//! - `Partial`: equal only after lowercasing (free-text attributes only)
//! - `Miss`: everything else
//!
//! `Partial` is a data-cleanliness signal, not a scoring tier: the shared
//! result text renders it the same as `Miss`.

use super::Boss;

/// Feedback for a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Match,
    Partial,
    Miss,
}

impl Feedback {
    /// Whether the raw values were exactly equal
    ///
    /// Only exact matches count as "filled" in share output.
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Feedback for one full guess, in fixed attribute order
///
/// The order (name, region, type, damage, remembrance) is the canonical
/// column order for both the grid and the share text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackRow {
    pub name: Feedback,
    pub region: Feedback,
    pub kind: Feedback,
    pub damage: Feedback,
    pub remembrance: Feedback,
}

impl FeedbackRow {
    /// Display headers in canonical attribute order
    pub const HEADERS: [&'static str; 5] = ["Name", "Region", "Type", "Damage", "Remembrance"];

    /// Compare a guess against the target attribute by attribute
    ///
    /// # Examples
    /// ```
    /// use bossdle::core::{Boss, Feedback, FeedbackRow};
    ///
    /// let target = Boss {
    ///     name: "Malenia".into(),
    ///     region: "Haligtree".into(),
    ///     kind: "Demigod".into(),
    ///     damage: "Scarlet Rot".into(),
    ///     remembrance: true,
    ///     alias: None,
    /// };
    /// let mut guess = target.clone();
    /// guess.region = "haligtree".into();
    /// guess.damage = "Physical".into();
    ///
    /// let row = FeedbackRow::evaluate(&guess, &target);
    /// assert_eq!(row.name, Feedback::Match);
    /// assert_eq!(row.region, Feedback::Partial);
    /// assert_eq!(row.damage, Feedback::Miss);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Boss, target: &Boss) -> Self {
        Self {
            name: judge_text(&guess.name, &target.name),
            region: judge_text(&guess.region, &target.region),
            kind: judge_text(&guess.kind, &target.kind),
            damage: judge_text(&guess.damage, &target.damage),
            remembrance: judge_bool(guess.remembrance, target.remembrance),
        }
    }

    /// The five cells in canonical attribute order
    #[must_use]
    pub const fn cells(&self) -> [Feedback; 5] {
        [
            self.name,
            self.region,
            self.kind,
            self.damage,
            self.remembrance,
        ]
    }

    /// Whether every attribute matched exactly
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.cells().iter().all(|c| c.is_exact())
    }
}

fn judge_text(guess: &str, target: &str) -> Feedback {
    if guess == target {
        Feedback::Match
    } else if guess.to_lowercase() == target.to_lowercase() {
        Feedback::Partial
    } else {
        Feedback::Miss
    }
}

const fn judge_bool(guess: bool, target: bool) -> Feedback {
    if guess == target {
        Feedback::Match
    } else {
        Feedback::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malenia() -> Boss {
        Boss {
            name: "Malenia".to_string(),
            region: "Haligtree".to_string(),
            kind: "Demigod".to_string(),
            damage: "Scarlet Rot".to_string(),
            remembrance: true,
            alias: None,
        }
    }

    #[test]
    fn evaluate_mixed_feedback() {
        let target = malenia();
        let guess = Boss {
            name: "Malenia".to_string(),
            region: "haligtree".to_string(),
            kind: "Demigod".to_string(),
            damage: "Physical".to_string(),
            remembrance: true,
            alias: None,
        };

        let row = FeedbackRow::evaluate(&guess, &target);
        assert_eq!(row.name, Feedback::Match);
        assert_eq!(row.region, Feedback::Partial);
        assert_eq!(row.kind, Feedback::Match);
        assert_eq!(row.damage, Feedback::Miss);
        assert_eq!(row.remembrance, Feedback::Match);
    }

    #[test]
    fn evaluate_self_is_perfect() {
        let target = malenia();
        let row = FeedbackRow::evaluate(&target, &target);
        assert!(row.is_perfect());
        assert_eq!(row.cells(), [Feedback::Match; 5]);
    }

    #[test]
    fn boolean_attribute_never_partial() {
        let target = malenia();
        let mut guess = malenia();
        guess.remembrance = false;

        let row = FeedbackRow::evaluate(&guess, &target);
        assert_eq!(row.remembrance, Feedback::Miss);
    }

    #[test]
    fn partial_is_not_exact() {
        assert!(Feedback::Match.is_exact());
        assert!(!Feedback::Partial.is_exact());
        assert!(!Feedback::Miss.is_exact());
    }

    #[test]
    fn completely_different_is_all_miss() {
        let target = malenia();
        let guess = Boss {
            name: "Fire Giant".to_string(),
            region: "Mountaintops of the Giants".to_string(),
            kind: "Giant".to_string(),
            damage: "Fire".to_string(),
            remembrance: false,
            alias: None,
        };

        let row = FeedbackRow::evaluate(&guess, &target);
        assert_eq!(row.cells(), [Feedback::Miss; 5]);
        assert!(!row.is_perfect());
    }
}
