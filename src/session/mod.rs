//! Puzzle session state: attempts, outcomes, and lifetime stats
//!
//! `Ledger` owns the ordered attempt list for the current day and its
//! persistence invariants. `Stats` owns the cumulative counters. `PuzzleSession`
//! composes them with the catalog and the day index into the win/loss state
//! machine the front-ends drive.

mod ledger;
mod puzzle;
mod stats;

pub use ledger::{Ledger, MAX_ATTEMPTS};
pub use puzzle::{GuessReport, Outcome, PuzzleSession};
pub use stats::Stats;

use std::fmt;

/// Rejection of a single guess submission
///
/// Every variant is recoverable: the session state is unchanged and the
/// player may submit again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// The guess text matched no catalog entry
    UnknownBoss,
    /// The same boss (by normalized name) was already guessed today
    DuplicateGuess,
    /// The attempt budget is exhausted
    LedgerFull,
    /// The puzzle already ended in a win or loss
    AlreadyResolved,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBoss => write!(f, "Invalid boss name."),
            Self::DuplicateGuess => write!(f, "Already guessed!"),
            Self::LedgerFull => write!(f, "No attempts remaining."),
            Self::AlreadyResolved => write!(f, "Today's puzzle is already finished."),
        }
    }
}

impl std::error::Error for GuessError {}
