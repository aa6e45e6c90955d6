//! Deterministic day→puzzle machinery
//!
//! `calendar` converts wall-clock instants into canonical day indices;
//! `selector` maps a day index to one catalog entry. Between them they
//! guarantee every player sees the same boss on the same civil day.

mod calendar;
mod selector;

pub use calendar::{BOUNDARY_OFFSET, EPOCH, day_index, puzzle_number};
pub use selector::{SelectError, select_target};
