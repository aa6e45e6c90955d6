//! Non-interactive summary commands: lifetime stats and today's share text

use crate::output::share::day_label;
use crate::session::PuzzleSession;
use crate::storage::Storage;
use colored::Colorize;

/// Print the lifetime counters
pub fn print_stats<S: Storage>(session: &PuzzleSession<S>) {
    let stats = session.stats();
    println!("{}", day_label(session.day_index()).bold());
    println!("  Streak: {}", stats.streak);
    println!("  Wins:   {}", stats.wins);
    println!("  Played: {}", stats.played);
}

/// Print today's share block, or a hint if the puzzle is still open
pub fn print_share<S: Storage>(session: &PuzzleSession<S>) {
    match session.share_text() {
        Some(text) => println!("{text}"),
        None => println!(
            "{} is still in progress. Finish it first.",
            day_label(session.day_index())
        ),
    }
}
