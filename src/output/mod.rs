//! Result rendering: share text and terminal formatting

pub mod display;
pub mod share;
