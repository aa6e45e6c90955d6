//! TUI rendering with ratatui

use super::app::{App, Message, MessageStyle};
use crate::core::{Boss, Feedback, FeedbackRow};
use crate::output::display::bool_text;
use crate::output::share::day_label;
use crate::session::{MAX_ATTEMPTS, Outcome};
use crate::storage::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const WIDTHS: [usize; 5] = [30, 24, 11, 13, 11];

/// Main UI rendering function
pub fn ui<S: Storage>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 3), // Grid
            Constraint::Min(5),                      // Messages / share text
            Constraint::Length(3),                   // Input
            Constraint::Length(3),                   // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut title = format!("⚔  {}", day_label(app.session.day_index()));
    if app.session.test_mode() {
        title.push_str("  [TEST MODE]");
    }

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = vec![header_row()];

    let rows = app.session.display_rows();
    for (boss, feedback) in &rows {
        lines.push(attempt_row(boss, feedback));
    }
    for _ in rows.len()..MAX_ATTEMPTS {
        lines.push(empty_row());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Attempts ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn header_row() -> Line<'static> {
    let spans = FeedbackRow::HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(header, width)| {
            Span::styled(
                format!("{header:<width$}"),
                Style::default().add_modifier(Modifier::BOLD),
            )
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn attempt_row(boss: &Boss, feedback: &FeedbackRow) -> Line<'static> {
    let values = [
        boss.name.clone(),
        boss.region.clone(),
        boss.kind.clone(),
        boss.damage.clone(),
        bool_text(boss.remembrance).to_string(),
    ];

    let spans = values
        .into_iter()
        .zip(feedback.cells())
        .zip(WIDTHS)
        .map(|((value, cell), width)| {
            Span::styled(format!("{value:<width$}"), cell_style(cell))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn empty_row() -> Line<'static> {
    let spans = WIDTHS
        .iter()
        .map(|&width| {
            Span::styled(
                format!("{:<width$}", "-"),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn cell_style(cell: Feedback) -> Style {
    match cell {
        Feedback::Match => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Feedback::Partial => Style::default().fg(Color::Yellow),
        Feedback::Miss => Style::default().fg(Color::DarkGray),
    }
}

fn render_messages<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    // Once resolved, the share block replaces the message feed
    if let Some(text) = app.session.share_text() {
        let style = match app.session.outcome() {
            Outcome::Won => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::Red),
        };
        let share = Paragraph::new(text).style(style).block(
            Block::default()
                .title(" Share your result ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(share, area);
        return;
    }

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(message_item)
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn message_item(msg: &Message) -> ListItem<'static> {
    let style = match msg.style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default().fg(Color::Green),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    ListItem::new(msg.text.clone()).style(style)
}

fn render_input<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, color) = if app.session.outcome().is_terminal() {
        (" Puzzle finished, come back tomorrow ", Color::Green)
    } else {
        (" Boss name | Enter: submit ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Streak: {} | Wins: {} | Played: {}",
        stats.streak, stats.wins, stats.played
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[0]);

    let attempts_text = format!("Attempts: {}/{MAX_ATTEMPTS}", app.session.attempts_used());
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Esc: Quit | F2: Skip Day | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
