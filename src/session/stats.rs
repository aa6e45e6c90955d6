//! Lifetime puzzle statistics
//!
//! Persisted independently of any single day's ledger and mutated exactly
//! once per terminal transition. Never mutated while test-offset mode is
//! active.

use crate::storage::Storage;
use serde::{Deserialize, Serialize};

/// Storage key for lifetime stats
const STATS_KEY: &str = "bossdle_stats_v1";

/// Cumulative win/streak counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Consecutive most-recent wins, reset to 0 by any loss
    pub streak: u32,
    pub wins: u32,
    pub played: u32,
}

impl Stats {
    /// Load persisted stats, falling back to zeroed counters
    ///
    /// A missing, unparseable, or inconsistent record (`wins > played`) is
    /// treated as absent; corruption must never block play.
    #[must_use]
    pub fn load(storage: &dyn Storage) -> Self {
        storage
            .get(STATS_KEY)
            .and_then(|raw| serde_json::from_str::<Self>(&raw).ok())
            .filter(|stats| stats.wins <= stats.played)
            .unwrap_or_default()
    }

    /// Apply one terminal outcome and persist
    ///
    /// `played` always increments; a win also increments `wins` and `streak`,
    /// a loss zeroes `streak`. The caller is responsible for invoking this
    /// exactly once per terminal transition and never in test mode.
    pub fn record_outcome(&mut self, storage: &mut dyn Storage, won: bool) {
        self.played += 1;
        if won {
            self.wins += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.persist(storage);
    }

    fn persist(&self, storage: &mut dyn Storage) {
        if let Ok(raw) = serde_json::to_string(self) {
            storage.set(STATS_KEY, &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn win_updates_all_counters() {
        let mut store = MemoryStore::new();
        let mut stats = Stats::default();

        stats.record_outcome(&mut store, true);
        assert_eq!(stats, Stats { streak: 1, wins: 1, played: 1 });
    }

    #[test]
    fn loss_resets_streak_keeps_wins() {
        let mut store = MemoryStore::new();
        let mut stats = Stats { streak: 4, wins: 9, played: 12 };

        stats.record_outcome(&mut store, false);
        assert_eq!(stats, Stats { streak: 0, wins: 9, played: 13 });
    }

    #[test]
    fn record_persists_immediately() {
        let mut store = MemoryStore::new();
        let mut stats = Stats::default();
        stats.record_outcome(&mut store, true);

        assert_eq!(Stats::load(&store), stats);
    }

    #[test]
    fn missing_record_is_zeroed() {
        assert_eq!(Stats::load(&MemoryStore::new()), Stats::default());
    }

    #[test]
    fn corrupt_record_is_zeroed() {
        let mut store = MemoryStore::new();
        store.set("bossdle_stats_v1", "streak=high");
        assert_eq!(Stats::load(&store), Stats::default());
    }

    #[test]
    fn inconsistent_record_is_zeroed() {
        let mut store = MemoryStore::new();
        store.set("bossdle_stats_v1", "{\"streak\":0,\"wins\":5,\"played\":2}");
        assert_eq!(Stats::load(&store), Stats::default());
    }

    #[test]
    fn wins_never_exceed_played() {
        let mut store = MemoryStore::new();
        let mut stats = Stats::default();
        for won in [true, true, false, true, false] {
            stats.record_outcome(&mut store, won);
            assert!(stats.wins <= stats.played);
        }
        assert_eq!(stats, Stats { streak: 0, wins: 3, played: 5 });
    }
}
