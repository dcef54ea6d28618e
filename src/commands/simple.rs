//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each input line is either a guess or a
//! slash command.

use crate::output::{print_board, print_keyboard, print_outcome, print_statistics, share_text};
use crate::session::Game;
use crate::store::Store;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    Help,
    NewRandom,
    Daily,
    ToggleHardMode,
    Stats,
    Share,
    Guess(String),
}

impl LineCommand {
    /// Parse a line; `None` for blank input or an unknown slash command
    ///
    /// # Examples
    /// ```
    /// use neonword::commands::LineCommand;
    ///
    /// assert_eq!(LineCommand::parse("/q"), Some(LineCommand::Quit));
    /// assert_eq!(
    ///     LineCommand::parse(" stats "),
    ///     Some(LineCommand::Guess("stats".to_string()))
    /// );
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(command) = line.strip_prefix('/') else {
            return Some(Self::Guess(line.to_string()));
        };

        match command.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Self::Quit),
            "h" | "help" | "?" => Some(Self::Help),
            "n" | "new" | "random" => Some(Self::NewRandom),
            "d" | "daily" => Some(Self::Daily),
            "hard" => Some(Self::ToggleHardMode),
            "s" | "stats" => Some(Self::Stats),
            "share" => Some(Self::Share),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// `today` is the date key used when switching back to the daily puzzle.
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple<S: Store>(game: &mut Game<S>, today: &str) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          NeonWord - Line Mode        ║");
    println!("╚══════════════════════════════════════╝");
    print_help();

    print_board(game.session());
    print_keyboard(game.session().keyboard());
    print_outcome(game.session());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n{} ", ">".bright_magenta().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        let Some(command) = LineCommand::parse(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown command, type /help");
            }
            continue;
        };

        match command {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Help => print_help(),
            LineCommand::NewRandom => {
                game.start_random();
                println!("\n🔄 New random puzzle!");
                show(game);
            }
            LineCommand::Daily => {
                game.switch_to_daily(today);
                show(game);
            }
            LineCommand::ToggleHardMode => {
                let enabled = !game.settings().hard_mode;
                game.set_hard_mode(enabled);
                println!("Hard mode {}", if enabled { "on" } else { "off" });
            }
            LineCommand::Stats => print_statistics(game.stats()),
            LineCommand::Share => match share_text(game.session()) {
                Some(text) => println!("\n{text}"),
                None => println!("Finish the puzzle to share it"),
            },
            LineCommand::Guess(text) => match game.guess_word(&text) {
                Ok(outcome) => {
                    show(game);
                    if outcome.finished.is_some() {
                        println!("\nType /new for a random puzzle or /q to quit");
                    }
                }
                Err(e) => println!("{} {e}", "✗".red().bold()),
            },
        }
    }
}

fn show<S: Store>(game: &Game<S>) {
    print_board(game.session());
    print_keyboard(game.session().keyboard());
    print_outcome(game.session());
}

fn print_help() {
    println!("\nType a 5-letter word and press Enter to guess.");
    println!("Commands: /new random puzzle, /daily today's puzzle, /hard toggle hard mode,");
    println!("          /stats statistics, /share share text, /help, /q quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slash_commands() {
        assert_eq!(LineCommand::parse("/quit"), Some(LineCommand::Quit));
        assert_eq!(LineCommand::parse("/NEW"), Some(LineCommand::NewRandom));
        assert_eq!(LineCommand::parse("/daily"), Some(LineCommand::Daily));
        assert_eq!(LineCommand::parse("/hard"), Some(LineCommand::ToggleHardMode));
        assert_eq!(LineCommand::parse("/s"), Some(LineCommand::Stats));
        assert_eq!(LineCommand::parse("/share"), Some(LineCommand::Share));
        assert_eq!(LineCommand::parse("/?"), Some(LineCommand::Help));
    }

    #[test]
    fn parse_words_as_guesses() {
        assert_eq!(
            LineCommand::parse("  Piano\n"),
            Some(LineCommand::Guess("Piano".to_string()))
        );
        assert_eq!(
            LineCommand::parse("share"),
            Some(LineCommand::Guess("share".to_string()))
        );
    }

    #[test]
    fn parse_blank_and_unknown() {
        assert_eq!(LineCommand::parse("   "), None);
        assert_eq!(LineCommand::parse("/undo"), None);
    }
}
