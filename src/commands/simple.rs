//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: prints the feedback grid after every
//! guess and the share block once the puzzle resolves.

use crate::output::display::{attempt_line, header_line};
use crate::output::share::day_label;
use crate::session::{MAX_ATTEMPTS, Outcome, PuzzleSession};
use crate::storage::Storage;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Storage>(session: &mut PuzzleSession<S>) -> Result<(), String> {
    println!("\n{}", "═".repeat(64));
    println!("  {}", day_label(session.day_index()).bold());
    println!("{}\n", "═".repeat(64));

    let stats = session.stats();
    println!(
        "Streak: {}   Wins: {}   Played: {}\n",
        stats.streak, stats.wins, stats.played
    );
    println!("Guess today's boss. Commands: 'quit' to exit, 'skip' to jump a day (test mode).\n");

    print_grid(session);

    if session.outcome().is_terminal() {
        print_result(session);
        return Ok(());
    }

    loop {
        let used = session.attempts_used();
        let input = get_user_input(&format!("Guess {}/{MAX_ATTEMPTS}", used + 1))?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\nCome back tomorrow!\n");
                return Ok(());
            }
            "skip" => {
                session.advance_test_day();
                println!(
                    "\nTest mode: advanced to {} (nothing will be saved)\n",
                    day_label(session.day_index())
                );
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&input) {
            Ok(report) => {
                println!();
                print_grid(session);

                match report.outcome {
                    Outcome::Won | Outcome::Lost => {
                        print_result(session);
                        return Ok(());
                    }
                    Outcome::InProgress | Outcome::NotStarted => {
                        println!("Try again!\n");
                    }
                }
            }
            Err(err) => println!("{err}\n"),
        }
    }
}

fn print_grid<S: Storage>(session: &PuzzleSession<S>) {
    let rows = session.display_rows();
    if rows.is_empty() {
        return;
    }

    println!("{}", header_line().bold());
    for (boss, row) in rows {
        println!("{}", attempt_line(boss, &row));
    }
    println!();
}

fn print_result<S: Storage>(session: &PuzzleSession<S>) {
    let Some(target) = session.target() else {
        return;
    };

    match session.outcome() {
        Outcome::Won => {
            println!(
                "{}",
                format!("You guessed {}!", target.name).bright_green().bold()
            );
        }
        Outcome::Lost => {
            println!(
                "{}",
                format!("The boss was {}", target.name).bright_red().bold()
            );
        }
        Outcome::NotStarted | Outcome::InProgress => return,
    }

    if let Some(text) = session.share_text() {
        println!("\n{text}\n");
        if session.test_mode() {
            println!("{}", "(test mode: result not recorded)".dimmed());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
