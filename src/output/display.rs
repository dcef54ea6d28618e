//! Display functions for command results

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, share_text, tile, tile_row};
use crate::commands::{DailyInfo, ScoreResult};
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::session::{MAX_ATTEMPTS, PuzzleSession, Status};
use crate::store::{Settings, Statistics};
use colored::Colorize;

/// Print the board: submitted rows, the row being typed, then empty rows
pub fn print_board(session: &PuzzleSession) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {}  {}",
        "NEONWORD".bright_magenta().bold(),
        session.mode().label().bright_yellow(),
        format!("({})", session.variant()).bright_black()
    );
    println!("{}", "─".repeat(40).cyan());

    for attempt in session.attempts() {
        println!("  {}", tile_row(&attempt.guess, attempt.pattern.verdicts()));
    }

    let mut drawn = session.attempts().len();
    if !session.status().is_finished() && drawn < MAX_ATTEMPTS {
        let typed: String = session
            .buffer()
            .bytes()
            .map(|b| tile(b, None).to_string())
            .collect();
        let blanks = " _ ".repeat(WORD_LENGTH - session.buffer().len());
        println!("  {typed}{}", blanks.bright_black());
        drawn += 1;
    }

    for _ in drawn..MAX_ATTEMPTS {
        println!("  {}", " · ".repeat(WORD_LENGTH).bright_black());
    }
}

/// Print the keyboard with the best verdict known for each letter
pub fn print_keyboard(keyboard: &LetterFeedback) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .bytes()
            .map(|b| tile(b, keyboard.get(b)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
}

/// Print the end-of-game banner and the share text
pub fn print_outcome(session: &PuzzleSession) {
    match session.status() {
        Status::InProgress => return,
        Status::Won => {
            let n = session.attempts().len();
            println!(
                "\n{}",
                format!("✅ Solved in {n} {}!", if n == 1 { "guess" } else { "guesses" })
                    .green()
                    .bold()
            );
        }
        Status::Lost => {
            println!(
                "\n{} {}",
                "❌ Out of attempts. The word was".red().bold(),
                session.answer().as_str().bright_yellow().bold()
            );
        }
    }

    if let Some(text) = share_text(session) {
        println!("\n{text}");
    }
}

/// Print statistics with the guess distribution histogram
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:       {}", stats.played);
    println!(
        "   Win rate:     {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Streak:       {}", stats.streak);
    println!("   Best streak:  {}", stats.best_streak);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = f64::from(stats.max_bucket());
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), max, 24);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}

pub fn print_settings(settings: &Settings) {
    println!(
        "Hard mode: {}",
        if settings.hard_mode {
            "on".green().bold()
        } else {
            "off".normal()
        }
    );
    println!("Variant:   {}", settings.variant);
}

/// Print the verdicts of a single scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{} vs {}",
        result.guess.as_str().bright_white().bold(),
        result.answer.as_str().bright_white().bold()
    );
    println!("{}", tile_row(&result.guess, result.pattern.verdicts()));
    println!(
        "{}  {} green, {} yellow",
        result.pattern.to_emoji(),
        result.pattern.count_greens(),
        result.pattern.count_yellows()
    );
}

/// Print a day's puzzle; the answer only when `reveal` is set
pub fn print_daily_info(info: &DailyInfo, reveal: bool) {
    println!("Date:    {}", info.date.bright_yellow());
    println!("Variant: {}", info.variant);
    println!("Seed:    {:#010x}", info.seed);
    if reveal {
        println!("Answer:  {}", info.answer.as_str().bright_green().bold());
    } else {
        println!("Answer:  {}", "hidden (use --reveal)".bright_black());
    }
}
