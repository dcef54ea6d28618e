//! NeonWord - CLI
//!
//! Daily and random five-letter word puzzles, in a TUI or on plain lines.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use neonword::{
    commands::{daily_info, run_simple, score_guess},
    interactive::{App, run_tui},
    logging::{Verbosity, init_subscriber},
    output::{
        print_daily_info, print_score_result, print_settings, print_statistics, share_text,
    },
    puzzle::{PuzzleGenerator, Variant, VariantKind, WordList, parse_date_key, today_key},
    session::Game,
    store::{FileStore, GameStorage, Settings},
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "neonword",
    about = "Daily and random five-letter word puzzles in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle variant: 'words' (dictionary) or 'letters' (any letters); overrides the saved setting
    #[arg(long, global = true, value_enum)]
    variant: Option<VariantKind>,

    /// Enforce hard mode for this run
    #[arg(long, global = true)]
    hard: bool,

    /// Custom dictionary file, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory for saved games, statistics and settings
    #[arg(long, global = true, env = "NEONWORD_DIR")]
    save_dir: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the full-screen TUI (default)
    Play {
        /// Start a new random puzzle instead of today's
        #[arg(long)]
        random: bool,
    },

    /// Play line by line without the TUI
    Simple {
        /// Start a new random puzzle instead of today's
        #[arg(long)]
        random: bool,
    },

    /// Score a guess against an answer
    Score { guess: String, answer: String },

    /// Show the seed (and optionally the answer) of a daily puzzle
    Daily {
        /// Date as YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Print the answer
        #[arg(long)]
        reveal: bool,
    },

    /// Show statistics
    Stats {
        /// Clear all statistics
        #[arg(long)]
        reset: bool,
    },

    /// Show or change saved settings; pass --variant to save a variant
    Settings {
        #[arg(long, value_enum)]
        hard_mode: Option<Toggle>,
    },

    /// Print the share text of a finished puzzle
    Share {
        /// Share the random puzzle instead of today's
        #[arg(long)]
        random: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    let command = cli.command.unwrap_or(Commands::Play { random: false });

    match command {
        Commands::Score { guess, answer } => {
            let result = score_guess(&guess, &answer)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Daily { date, reveal } => {
            let date = match date {
                Some(text) => {
                    parse_date_key(&text).with_context(|| format!("invalid date '{text}'"))?
                }
                None => today_key(),
            };
            let kind = match cli.variant {
                Some(kind) => kind,
                None => open_storage(cli.save_dir)?.load_settings().variant,
            };
            let generator = PuzzleGenerator::new(build_variant(kind, cli.wordlist.as_deref())?);
            print_daily_info(&daily_info(&generator, &date), reveal);
            Ok(())
        }
        Commands::Stats { reset } => {
            let mut storage = open_storage(cli.save_dir)?;
            if reset {
                storage.clear_stats()?;
                println!("Statistics cleared");
            }
            print_statistics(&storage.load_stats());
            Ok(())
        }
        Commands::Settings { hard_mode } => {
            let mut storage = open_storage(cli.save_dir)?;
            let mut settings = storage.load_settings();
            if let Some(toggle) = hard_mode {
                settings.hard_mode = matches!(toggle, Toggle::On);
            }
            if let Some(kind) = cli.variant {
                settings.variant = kind;
            }
            if hard_mode.is_some() || cli.variant.is_some() {
                storage.save_settings(&settings)?;
            }
            print_settings(&settings);
            Ok(())
        }
        Commands::Share { random } => {
            let storage = open_storage(cli.save_dir)?;
            let kind = cli.variant.unwrap_or_else(|| storage.load_settings().variant);
            let session = if random {
                storage.load_random(kind)
            } else {
                storage.load_daily(&today_key(), kind)
            };
            match session.as_ref().and_then(share_text) {
                Some(text) => println!("{text}"),
                None => println!("No finished puzzle to share"),
            }
            Ok(())
        }
        Commands::Play { random } => {
            let game = open_game(cli.variant, cli.hard, cli.wordlist, cli.save_dir, random)?;
            run_tui(App::new(game, today_key()))
        }
        Commands::Simple { random } => {
            let mut game = open_game(cli.variant, cli.hard, cli.wordlist, cli.save_dir, random)?;
            run_simple(&mut game, &today_key()).context("line mode failed")
        }
    }
}

fn open_storage(save_dir: Option<PathBuf>) -> Result<GameStorage<FileStore>> {
    let dir = save_dir
        .or_else(FileStore::default_dir)
        .context("no data directory available, pass --save-dir")?;
    debug!(dir = %dir.display(), "opening save directory");

    let store = FileStore::open(&dir)
        .with_context(|| format!("cannot create save directory {}", dir.display()))?;
    Ok(GameStorage::new(store))
}

fn open_game(
    variant: Option<VariantKind>,
    hard: bool,
    wordlist: Option<PathBuf>,
    save_dir: Option<PathBuf>,
    random: bool,
) -> Result<Game<FileStore>> {
    let storage = open_storage(save_dir)?;

    // Flags apply to this run only
    let saved = storage.load_settings();
    let settings = Settings {
        hard_mode: saved.hard_mode || hard,
        variant: variant.unwrap_or(saved.variant),
    };
    let generator = PuzzleGenerator::new(build_variant(settings.variant, wordlist.as_deref())?);

    let mut game = if random {
        Game::open_random(storage, generator, settings)
    } else {
        Game::open_daily(storage, generator, settings, &today_key())
    };
    if random && game.session().status().is_finished() {
        game.start_random();
    }
    Ok(game)
}

fn build_variant(kind: VariantKind, wordlist: Option<&Path>) -> Result<Variant> {
    match kind {
        VariantKind::Letters => {
            if wordlist.is_some() {
                warn!("--wordlist has no effect with the letters variant");
            }
            Ok(Variant::FreeLetters)
        }
        VariantKind::Words => {
            let words = match wordlist {
                Some(path) => load_from_file(path)
                    .with_context(|| format!("cannot read word list {}", path.display()))?,
                None => words_from_slice(WORDS),
            };
            let list = WordList::new(words).context("word list has no valid words")?;
            Ok(Variant::Dictionary(list))
        }
    }
}
