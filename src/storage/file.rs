//! File-backed storage
//!
//! Each key maps to one JSON file inside a data directory. Every `set` is
//! flushed to disk immediately, so a mid-session reload reconstructs exact
//! progress.

use super::Storage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One-file-per-key storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this store writes into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // Best-effort: a corrupt or missing record falls back to defaults on
        // the next load, so write failures are reported but never fatal.
        if let Err(err) = fs::write(self.path_for(key), value) {
            eprintln!("bossdle: failed to persist '{key}': {err}");
        }
    }
}
