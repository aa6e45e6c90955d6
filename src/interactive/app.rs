//! TUI application state and logic

use crate::output::share::day_label;
use crate::session::{Outcome, PuzzleSession};
use crate::storage::Storage;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: Storage> {
    pub session: PuzzleSession<S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: Storage> App<S> {
    #[must_use]
    pub fn new(session: PuzzleSession<S>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        app.add_message(
            &format!("Welcome to {}!", day_label(app.session.day_index())),
            MessageStyle::Info,
        );
        match app.session.outcome() {
            Outcome::Won | Outcome::Lost => app.announce_result(),
            Outcome::InProgress => {
                app.add_message("Welcome back! Your attempts were restored.", MessageStyle::Info);
            }
            Outcome::NotStarted => {
                app.add_message("Type a boss name and press Enter.", MessageStyle::Info);
            }
        }

        app
    }

    /// Submit whatever is in the input buffer
    pub fn submit(&mut self) {
        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        match self.session.submit_guess(&input) {
            Ok(report) => {
                self.input_buffer.clear();
                match report.outcome {
                    Outcome::Won | Outcome::Lost => self.announce_result(),
                    Outcome::InProgress | Outcome::NotStarted => {
                        self.add_message("Try again!", MessageStyle::Info);
                    }
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Jump to the next day's puzzle (test mode, nothing persisted)
    pub fn skip_day(&mut self) {
        self.session.advance_test_day();
        self.input_buffer.clear();
        self.add_message(
            &format!(
                "Test mode: advanced to {} (nothing will be saved)",
                day_label(self.session.day_index())
            ),
            MessageStyle::Info,
        );
    }

    fn announce_result(&mut self) {
        let outcome = self.session.outcome();
        let Some(name) = self.session.target().map(|t| t.name.clone()) else {
            return;
        };

        match outcome {
            Outcome::Won => {
                self.add_message(&format!("You guessed {name}!"), MessageStyle::Success);
            }
            Outcome::Lost => {
                self.add_message(&format!("The boss was {name}"), MessageStyle::Error);
            }
            Outcome::NotStarted | Outcome::InProgress => return,
        }

        self.add_message(
            "Share text is shown below. F2: next day (test) | Esc: quit",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Storage>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::F(2) => {
                    app.skip_day();
                }
                KeyCode::Enter => {
                    app.submit();
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
