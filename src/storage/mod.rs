//! Key-value storage port
//!
//! The puzzle engine persists exactly two records (the attempt ledger and
//! lifetime stats) through this small get/set interface, so it never depends
//! on a concrete storage mechanism. `MemoryStore` backs tests; `FileStore`
//! backs the real binary.

mod file;

pub use file::FileStore;

use rustc_hash::FxHashMap;

/// Durable key-value storage for the two persisted puzzle records
///
/// Writes are best-effort: a failing backend degrades to a fresh ledger and
/// zeroed stats on the next load, it never aborts play.
pub trait Storage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory storage, mainly for tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("k", "v1");
        assert_eq!(store.get("k").as_deref(), Some("v1"));

        store.set("k", "v2");
        assert_eq!(store.get("k").as_deref(), Some("v2"));
    }
}
