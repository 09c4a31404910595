//! Brainrodle - CLI
//!
//! Word-guessing game with a shared daily word, an unlimited practice mode,
//! and a TUI or plain line-based frontend.

use anyhow::{Context, Result};
use brainrodle::{
    commands::{run_schedule, run_simple},
    config::Config,
    core::Dictionary,
    game::{Game, Mode},
    interactive::{App, run_tui},
    output::{print_coverage, print_daily_word, print_schedule, print_stats, print_word_list},
    selector::{ReferenceZone, SystemClock, select_daily_word},
    stats::FileStore,
    wordlists::loader::load_from_file,
};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use log::{LevelFilter, debug};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const LOG_FILE: &str = "brainrodle.log";

#[derive(Parser)]
#[command(
    name = "brainrodle",
    about = "Guess the brainrot word of the day (or as many as you like)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: platform config dir/brainrodle/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for stats records (overrides the config file)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Custom word list file (`WORD|description` per line) instead of the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Game mode: daily or unlimited
        #[arg(short, long, default_value = "daily")]
        mode: Mode,
    },

    /// Simple CLI mode (line-based, no TUI)
    Simple {
        /// Game mode: daily or unlimited
        #[arg(short, long, default_value = "daily")]
        mode: Mode,
    },

    /// List the words of a mode with their descriptions
    Words {
        /// Game mode: daily or unlimited
        #[arg(short, long, default_value = "daily")]
        mode: Mode,
    },

    /// Show saved statistics
    Stats {
        /// Game mode: daily or unlimited
        #[arg(short, long, default_value = "daily")]
        mode: Mode,
    },

    /// Print the daily word for a date (default: today)
    Word {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Audit the daily word schedule over a range of dates
    Schedule {
        /// First date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        from: Option<NaiveDate>,

        /// Number of days to compute
        #[arg(short = 'n', long, default_value = "365")]
        days: usize,

        /// Print every date, not just the summary
        #[arg(short, long)]
        list: bool,
    },
}

/// Set up `env_logger`; `RUST_LOG` wins over the configured level
///
/// The TUI owns the terminal, so its logs go to a file in the data directory.
fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.to_string()));

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Dictionary for `mode`, or the custom list when one was given
fn load_dictionary(mode: Mode, wordlist: Option<&Path>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading word list {}", path.display())),
        None => Ok(mode.dictionary()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { mode: Mode::Daily });

    let log_file = matches!(command, Commands::Play { .. }).then(|| data_dir.join(LOG_FILE));
    init_logging(config.log_level()?, log_file.as_deref())?;
    let zone = config.zone()?;
    debug!("data dir {}, reference zone {zone}", data_dir.display());

    let wordlist = cli.wordlist.as_deref();
    match command {
        Commands::Play { mode } => {
            let game = new_game(mode, wordlist, &data_dir, zone)?;
            run_tui(App::new(game))
        }
        Commands::Simple { mode } => {
            let mut game = new_game(mode, wordlist, &data_dir, zone)?;
            run_simple(&mut game).context("simple mode")
        }
        Commands::Words { mode } => {
            print_word_list(mode, &load_dictionary(mode, wordlist)?);
            Ok(())
        }
        Commands::Stats { mode } => {
            let game = new_game(mode, wordlist, &data_dir, zone)?;
            print_stats(mode, &game.load_stats());
            Ok(())
        }
        Commands::Word { date } => {
            let dictionary = load_dictionary(Mode::Daily, wordlist)?;
            let date = date.unwrap_or_else(|| zone.date_at(Utc::now()));
            let word = select_daily_word(date, &dictionary);
            print_daily_word(date, word, dictionary.description(word));
            Ok(())
        }
        Commands::Schedule { from, days, list } => {
            let dictionary = load_dictionary(Mode::Daily, wordlist)?;
            let start = from.unwrap_or_else(|| zone.date_at(Utc::now()));
            let run = run_schedule(start, days, &dictionary);
            if list {
                print_schedule(&run.schedule);
            }
            print_coverage(&run.coverage);
            Ok(())
        }
    }
}

fn new_game(
    mode: Mode,
    wordlist: Option<&Path>,
    data_dir: &Path,
    zone: ReferenceZone,
) -> Result<Game<FileStore>> {
    let dictionary = load_dictionary(mode, wordlist)?;
    Ok(Game::new(
        mode,
        dictionary,
        FileStore::new(data_dir),
        SystemClock,
        zone,
    ))
}
