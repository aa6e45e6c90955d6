//! Bossdle
//!
//! A daily deterministic boss-guessing puzzle. Every civil day (in a fixed
//! reference zone) selects one boss from the catalog; the player guesses
//! catalog entries and receives per-attribute feedback until a match or the
//! six-attempt budget runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use bossdle::catalog;
//! use bossdle::session::PuzzleSession;
//! use bossdle::storage::MemoryStore;
//! use time::OffsetDateTime;
//!
//! let catalog = catalog::load_default().unwrap();
//! let mut session =
//!     PuzzleSession::new(catalog, MemoryStore::new(), OffsetDateTime::now_utc()).unwrap();
//!
//! match session.submit_guess("Margit") {
//!     Ok(report) => println!("{:?}", report.outcome),
//!     Err(err) => println!("{err}"),
//! }
//! ```

// Core domain types
pub mod core;

// Day index and target selection
pub mod daily;

// Key-value storage port
pub mod storage;

// Ledger, stats, and the puzzle state machine
pub mod session;

// Catalog loading
pub mod catalog;

// Share text and terminal formatting
pub mod output;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
