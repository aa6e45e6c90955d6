//! The attempt ledger for the current day's puzzle
//!
//! Invariants:
//! - every attempt belongs to the puzzle identified by `day_index`; a stale
//!   persisted ledger is discarded on load (the daily-reset rule)
//! - no two attempts share a normalized name
//! - at most [`MAX_ATTEMPTS`] attempts
//! - every accepted attempt is flushed to storage immediately
//!
//! In test-offset mode the ledger lives purely in memory: storage is neither
//! read nor written, so skipping days can never corrupt real progress.

use super::GuessError;
use crate::core::Boss;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};

/// Attempt budget per puzzle
pub const MAX_ATTEMPTS: usize = 6;

/// Storage key for the current day's attempts
const ATTEMPTS_KEY: &str = "bossdle_attempts_v1";

/// Ordered attempts for one day's puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    day_index: i64,
    attempts: Vec<Boss>,
}

impl Ledger {
    /// A fresh ledger with no attempts
    #[must_use]
    pub const fn empty(day_index: i64) -> Self {
        Self {
            day_index,
            attempts: Vec::new(),
        }
    }

    /// Load the persisted ledger for `day_index`
    ///
    /// A record for a different day, a missing record, or an unparseable one
    /// all yield a fresh empty ledger; corruption must never block play. In
    /// test mode storage is ignored entirely.
    #[must_use]
    pub fn load(storage: &dyn Storage, day_index: i64, test_mode: bool) -> Self {
        if test_mode {
            return Self::empty(day_index);
        }

        storage
            .get(ATTEMPTS_KEY)
            .and_then(|raw| serde_json::from_str::<Self>(&raw).ok())
            .filter(|ledger| ledger.day_index == day_index)
            .unwrap_or_else(|| Self::empty(day_index))
    }

    /// Record one attempt
    ///
    /// On success the attempt is appended and (outside test mode) flushed to
    /// storage before returning, so a crash cannot lose an accepted guess.
    ///
    /// # Errors
    /// - `DuplicateGuess` if the boss was already attempted today
    /// - `LedgerFull` if the attempt budget is exhausted
    pub fn record(
        &mut self,
        storage: &mut dyn Storage,
        attempt: Boss,
        test_mode: bool,
    ) -> Result<(), GuessError> {
        if self.attempts.iter().any(|a| a.same_boss(&attempt)) {
            return Err(GuessError::DuplicateGuess);
        }
        if self.attempts.len() >= MAX_ATTEMPTS {
            return Err(GuessError::LedgerFull);
        }

        self.attempts.push(attempt);
        if !test_mode {
            self.persist(storage);
        }
        Ok(())
    }

    /// Attempts in submission order
    #[must_use]
    pub fn attempts(&self) -> &[Boss] {
        &self.attempts
    }

    /// The day this ledger belongs to
    #[must_use]
    pub const fn day_index(&self) -> i64 {
        self.day_index
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.attempts.len() >= MAX_ATTEMPTS
    }

    fn persist(&self, storage: &mut dyn Storage) {
        if let Ok(raw) = serde_json::to_string(self) {
            storage.set(ATTEMPTS_KEY, &raw);
        }
    }
}
