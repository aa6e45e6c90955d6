//! Command implementations

pub mod simple;
pub mod summary;

pub use simple::run_simple;
pub use summary::{print_share, print_stats};
