//! The composed puzzle state machine
//!
//! `PuzzleSession` owns the catalog, the storage port, the current ledger,
//! and lifetime stats, and exposes the full surface the front-ends render
//! from. The outcome is never stored: it is recomputed from `(ledger,
//! target)` on every read, so derived state stays consistent with storage
//! across restarts and even hand-edited records.

use super::{GuessError, Ledger, MAX_ATTEMPTS, Stats};
use crate::core::{Boss, Catalog, FeedbackRow};
use crate::daily::{self, SelectError};
use crate::output::share;
use crate::storage::Storage;
use time::OffsetDateTime;

/// Derived puzzle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Terminal outcomes accept no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone)]
pub struct GuessReport {
    pub boss: Boss,
    pub row: FeedbackRow,
    pub outcome: Outcome,
}

/// One player's session against today's puzzle
///
/// Constructed from `(catalog, storage, clock)`; there are no ambient
/// globals. Dropping and reconstructing a session for the same day yields
/// identical derived state without re-scoring stats.
pub struct PuzzleSession<S: Storage> {
    catalog: Catalog,
    storage: S,
    base_day: i64,
    test_offset: i64,
    ledger: Ledger,
    target: Boss,
    stats: Stats,
}

impl<S: Storage> PuzzleSession<S> {
    /// Start (or resume) the session for the civil day containing `now`
    ///
    /// Loads the persisted ledger, discarding it if it belongs to a previous
    /// day, and selects today's target.
    ///
    /// # Errors
    /// Returns `SelectError::EmptyCatalog` if the catalog has no entries.
    pub fn new(catalog: Catalog, storage: S, now: OffsetDateTime) -> Result<Self, SelectError> {
        let base_day = daily::day_index(now, 0);
        let target = daily::select_target(base_day, &catalog)?.clone();
        let ledger = Ledger::load(&storage, base_day, false);
        let stats = Stats::load(&storage);

        Ok(Self {
            catalog,
            storage,
            base_day,
            test_offset: 0,
            ledger,
            target,
            stats,
        })
    }

    /// Current day index, including any test offset
    #[must_use]
    pub const fn day_index(&self) -> i64 {
        self.base_day + self.test_offset
    }

    /// Human-facing puzzle ordinal
    #[must_use]
    pub const fn puzzle_number(&self) -> i64 {
        daily::puzzle_number(self.day_index())
    }

    /// Whether the volatile skip-day offset is active
    ///
    /// While active, neither the ledger nor stats touch storage.
    #[must_use]
    pub const fn test_mode(&self) -> bool {
        self.test_offset != 0
    }

    /// Recompute the outcome from the ledger and target
    ///
    /// The win condition is checked first, so a match at any position wins
    /// even on a full ledger.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let attempts = self.ledger.attempts();
        if attempts.iter().any(|a| a.same_boss(&self.target)) {
            Outcome::Won
        } else if attempts.len() >= MAX_ATTEMPTS {
            Outcome::Lost
        } else if attempts.is_empty() {
            Outcome::NotStarted
        } else {
            Outcome::InProgress
        }
    }

    /// Submit a raw guess string
    ///
    /// On success the attempt is recorded (and persisted outside test mode)
    /// and the new outcome returned. A terminal transition caused by this
    /// call updates stats exactly once; load-time reconstruction never does.
    ///
    /// # Errors
    /// - `AlreadyResolved` once the puzzle is won or lost
    /// - `UnknownBoss` if the text matches no catalog entry
    /// - `DuplicateGuess` / `LedgerFull` from the ledger
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, GuessError> {
        if self.outcome().is_terminal() {
            return Err(GuessError::AlreadyResolved);
        }

        let boss = self
            .catalog
            .find(raw)
            .ok_or(GuessError::UnknownBoss)?
            .clone();

        let test_mode = self.test_mode();
        self.ledger.record(&mut self.storage, boss.clone(), test_mode)?;

        let outcome = self.outcome();
        if outcome.is_terminal() && !test_mode {
            self.stats
                .record_outcome(&mut self.storage, matches!(outcome, Outcome::Won));
        }

        let row = FeedbackRow::evaluate(&boss, &self.target);
        Ok(GuessReport { boss, row, outcome })
    }

    /// Advance to the next day's puzzle without waiting for midnight
    ///
    /// Test-only semantics: the offset is volatile, the in-memory ledger is
    /// reset, and nothing is persisted. Real progress and stats are untouched
    /// and reappear on a normal reload.
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe because the
    /// catalog was verified non-empty at construction.
    pub fn advance_test_day(&mut self) {
        self.test_offset += 1;
        self.ledger = Ledger::empty(self.day_index());
        self.target = daily::select_target(self.day_index(), &self.catalog)
            .expect("catalog verified non-empty at construction")
            .clone();
    }

    /// Attempts so far with their per-attribute feedback, in order
    #[must_use]
    pub fn display_rows(&self) -> Vec<(&Boss, FeedbackRow)> {
        self.ledger
            .attempts()
            .iter()
            .map(|boss| (boss, FeedbackRow::evaluate(boss, &self.target)))
            .collect()
    }

    /// Today's target, revealed only once the puzzle is over
    #[must_use]
    pub fn target(&self) -> Option<&Boss> {
        self.outcome().is_terminal().then_some(&self.target)
    }

    /// Canonical shareable result text, available only once the puzzle is over
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        match self.outcome() {
            Outcome::Won => Some(share::encode(
                self.day_index(),
                self.ledger.attempts(),
                &self.target,
                true,
            )),
            Outcome::Lost => Some(share::encode(
                self.day_index(),
                self.ledger.attempts(),
                &self.target,
                false,
            )),
            Outcome::NotStarted | Outcome::InProgress => None,
        }
    }

    /// Lifetime counters
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Attempts used so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.ledger.attempts().len()
    }

    /// The loaded catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
