//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::session::{MAX_ATTEMPTS, PuzzleSession};
use crate::store::Store;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: Store>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board and side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app.game.session(), main_chunks[0]);
    if app.show_stats {
        render_stats(f, app, main_chunks[1]);
    } else {
        render_messages(f, app, main_chunks[1]);
    }

    render_keyboard(f, app.game.session(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_header<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.game.session();
    let title = format!(
        "NEONWORD · {} · {}",
        session.mode().label(),
        session.variant()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn board_lines(session: &PuzzleSession) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for attempt in session.attempts() {
        let spans: Vec<Span> = attempt
            .guess
            .letters()
            .iter()
            .zip(attempt.pattern.verdicts())
            .flat_map(|(&letter, &verdict)| {
                [
                    Span::styled(format!(" {} ", char::from(letter)), verdict_style(Some(verdict))),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut drawn = session.attempts().len();
    if !session.status().is_finished() && drawn < MAX_ATTEMPTS {
        let typed = session.buffer().bytes().map(Some);
        let blanks = std::iter::repeat_n(None, WORD_LENGTH - session.buffer().len());
        let spans: Vec<Span> = typed
            .chain(blanks)
            .flat_map(|letter| {
                let tile = match letter {
                    Some(b) => Span::styled(
                        format!(" {} ", char::from(b)),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                };
                [tile, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        drawn += 1;
    }

    for _ in drawn..MAX_ATTEMPTS {
        lines.push(Line::styled(
            " ·  ·  ·  ·  · ".to_string(),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, session: &PuzzleSession, area: Rect) {
    let row = session.attempt_index().min(MAX_ATTEMPTS - 1) + 1;
    let board = Paragraph::new(board_lines(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Attempt {row}/{MAX_ATTEMPTS} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, session: &PuzzleSession, area: Rect) {
    let keyboard = session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    [
                        Span::styled(format!(" {} ", char::from(b)), verdict_style(keyboard.get(b))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(widget, area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_stats<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.game.stats();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(8),    // Distribution
            Constraint::Length(MAX_ATTEMPTS as u16 + 3), // Share text
        ])
        .split(area);

    // win_rate is within [0, 100]
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Statistics ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(stats.win_rate().round() as u16)
        .label(format!(
            "{} played | {:.0}% won | streak {} (best {})",
            stats.played,
            stats.win_rate(),
            stats.streak,
            stats.best_streak
        ));
    f.render_widget(gauge, chunks[0]);

    let max = stats.max_bucket();
    let bar_width = u32::from(chunks[1].width.saturating_sub(12).max(1));
    let current = app.game.session().outcome().filter(|o| o.won).map(|o| o.attempts);
    let lines: Vec<Line> = stats
        .distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let filled = (count.saturating_mul(bar_width) / max) as usize;
            let color = if current == Some(i + 1) {
                Color::Green
            } else {
                Color::Cyan
            };
            Line::from(vec![
                Span::raw(format!("{} ", i + 1)),
                Span::styled("█".repeat(filled.max(1)), Style::default().fg(color)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();
    let distribution = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(distribution, chunks[1]);

    let share = app
        .share()
        .unwrap_or_else(|| "Finish the puzzle to share it".to_string());
    let share = Paragraph::new(share).block(
        Block::default()
            .title(" Share ")
            .borders(Borders::ALL),
    );
    f.render_widget(share, chunks[2]);
}

fn render_messages<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(messages_list, area);
}

fn render_status<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let hard = if app.game.settings().hard_mode {
        Span::styled("HARD", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("normal", Style::default().fg(Color::DarkGray))
    };

    let status = Paragraph::new(Line::from(vec![
        hard,
        Span::styled(
            "  Enter: Submit | F2: Random | F3: Daily | F4: Hard | Tab: Stats | Esc: Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(status, area);
}
