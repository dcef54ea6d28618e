//! TUI application state and logic

use crate::output::share_text;
use crate::session::{Game, Status};
use crate::store::Store;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<S: Store> {
    pub game: Game<S>,
    pub messages: Vec<Message>,
    pub show_stats: bool,
    pub should_quit: bool,
    today: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: Store> App<S> {
    /// Wrap a game; `today` is the date key F3 switches back to
    #[must_use]
    pub fn new(game: Game<S>, today: impl Into<String>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            show_stats: false,
            should_quit: false,
            today: today.into(),
        };
        app.add_message("Type a word and press Enter", MessageStyle::Info);
        if app.game.session().status().is_finished() {
            app.show_stats = true;
        }
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc if self.show_stats => self.show_stats = false,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_stats = !self.show_stats,
            KeyCode::F(2) => self.new_random(),
            KeyCode::F(3) => self.open_daily(),
            KeyCode::F(4) => self.toggle_hard_mode(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.game.delete_letter();
            }
            KeyCode::Char(c) => {
                self.game.type_letter(c);
            }
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.game.submit() {
            Ok(outcome) => match outcome.finished {
                Some(finished) if finished.won => {
                    let n = self.game.session().attempts().len();
                    self.add_message(
                        &format!("Solved in {n} {}!", if n == 1 { "guess" } else { "guesses" }),
                        MessageStyle::Success,
                    );
                    self.show_stats = true;
                }
                Some(finished) => {
                    self.add_message(
                        &format!("Out of attempts. The word was {}", finished.answer),
                        MessageStyle::Error,
                    );
                    self.show_stats = true;
                }
                None => {}
            },
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_random(&mut self) {
        self.game.start_random();
        self.show_stats = false;
        self.add_message("New random puzzle", MessageStyle::Info);
    }

    pub fn open_daily(&mut self) {
        let today = self.today.clone();
        self.game.switch_to_daily(&today);
        self.show_stats = self.game.session().status().is_finished();
        self.add_message(&format!("Daily puzzle {today}"), MessageStyle::Info);
    }

    pub fn toggle_hard_mode(&mut self) {
        let enabled = !self.game.settings().hard_mode;
        self.game.set_hard_mode(enabled);
        self.add_message(
            if enabled { "Hard mode on" } else { "Hard mode off" },
            MessageStyle::Info,
        );
    }

    /// Share text of the current session, once it is finished
    #[must_use]
    pub fn share(&self) -> Option<String> {
        share_text(self.game.session())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.game.session().status() != Status::InProgress
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
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
pub fn run_tui<S: Store>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    if let Some(text) = app.share() {
        println!("{text}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Store>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<App<S>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{PuzzleGenerator, Variant};
    use crate::store::{GameStorage, MemoryStore, Settings};

    const DAY: &str = "2024-01-01";

    fn app() -> App<MemoryStore> {
        let game = Game::open_daily(
            GameStorage::new(MemoryStore::new()),
            PuzzleGenerator::new(Variant::FreeLetters),
            Settings::default(),
            DAY,
        );
        App::new(game, DAY)
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<MemoryStore>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_deleting_edit_the_buffer() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game.session().buffer(), "PI");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.session().buffer(), "P");
    }

    #[test]
    fn short_guess_reports_error() {
        let mut app = app();
        type_word(&mut app, "pix");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(app.game.session().attempts().is_empty());
    }

    #[test]
    fn winning_opens_stats_and_share() {
        let mut app = app();
        type_word(&mut app, "pixel");
        assert!(app.share().is_none());

        type_word(&mut app, "byxky");
        assert!(app.is_finished());
        assert!(app.show_stats);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
        assert!(app.share().unwrap().starts_with("NeonWord 2024-01-01 2/6"));
    }

    #[test]
    fn function_keys_switch_puzzles_and_settings() {
        let mut app = app();
        type_word(&mut app, "pixel");

        press(&mut app, KeyCode::F(4));
        assert!(app.game.settings().hard_mode);

        press(&mut app, KeyCode::F(2));
        assert!(!app.game.session().mode().is_daily());
        assert!(app.game.session().attempts().is_empty());

        press(&mut app, KeyCode::F(3));
        assert!(app.game.session().mode().is_daily());
        assert_eq!(app.game.session().attempts().len(), 1);
    }

    #[test]
    fn escape_closes_stats_before_quitting() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert!(app.show_stats);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_stats);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.game.session().buffer(), "");
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for _ in 0..10 {
            app.add_message("x", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
    }
}
