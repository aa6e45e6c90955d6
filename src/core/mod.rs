//! Core domain types for the daily boss puzzle
//!
//! This module contains the fundamental domain types with no clock or storage
//! dependencies. All types here are pure and directly testable.

mod entry;
mod feedback;

pub use entry::{Boss, Catalog, normalize};
pub use feedback::{Feedback, FeedbackRow};
