//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess, get colored tiles back.

use crate::core::{GameSession, MAX_ATTEMPTS, Outcome};
use crate::game::{Game, Mode, Start};
use crate::output::formatters::{colored_keyboard, colored_row, colored_stored_row, win_message};
use crate::output::print_stats;
use crate::selector::{Clock, format_countdown};
use crate::stats::KeyValueStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a played session ended
enum Flow {
    Finished,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: KeyValueStore, C: Clock>(game: &mut Game<S, C>) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(game, &mut stdin.lock())
}

/// Run the simple mode reading lines from `input`
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S, C, R>(game: &mut Game<S, C>, input: &mut R) -> io::Result<()>
where
    S: KeyValueStore,
    C: Clock,
    R: BufRead,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Brainrodle - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a guess and press Enter. After each guess:\n");
    println!("  {} letter in the right spot", " G ".black().on_green());
    println!("  {} letter in the word, wrong spot", " Y ".black().on_yellow());
    println!("  {} letter not in the word\n", " X ".white().on_bright_black());
    println!("Commands: 'quit' to exit\n");

    loop {
        let session = match game.start() {
            Start::Play(session) => session,
            start @ Start::AlreadyPlayed { .. } => {
                print_already_played(&start);
                return Ok(());
            }
        };

        if let Flow::Quit = play_session(game, session, input)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        print_stats(game.mode(), &game.load_stats());

        if game.mode() == Mode::Daily {
            println!(
                "Next word in: {}\n",
                format_countdown(game.time_until_next_word()).bright_cyan()
            );
            return Ok(());
        }

        match prompt(input, "Play again? (yes/no)")?
            .as_deref()
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yes" | "y") => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_already_played(start: &Start) {
    let Start::AlreadyPlayed {
        until_next_word,
        last_guesses,
    } = start
    else {
        return;
    };

    println!("{}", "You've already played today!".bright_yellow().bold());
    println!(
        "Next word in: {}",
        format_countdown(*until_next_word).bright_cyan()
    );
    if !last_guesses.is_empty() {
        println!("\nYour guesses:");
        for row in last_guesses {
            println!("  {}", colored_stored_row(row));
        }
    }
    println!();
}

fn play_session<S, C, R>(
    game: &mut Game<S, C>,
    mut session: GameSession,
    input: &mut R,
) -> io::Result<Flow>
where
    S: KeyValueStore,
    C: Clock,
    R: BufRead,
{
    println!(
        "🧠 Guess the {}-letter word in {MAX_ATTEMPTS} tries!\n",
        session.word_len().to_string().bright_cyan().bold()
    );

    loop {
        let label = format!("Guess {}/{MAX_ATTEMPTS}", session.attempt_index() + 1);
        let Some(line) = prompt(input, &label)? else {
            // End of input
            return Ok(Flow::Quit);
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
            return Ok(Flow::Quit);
        }

        let submission = match game.submit_guess(&session, &line) {
            Ok(submission) => submission,
            Err(e) => {
                println!("❌ {}\n", e.to_string().red());
                continue;
            }
        };

        session = submission.session;
        for row in session.rows() {
            println!("  {}", colored_row(row));
        }
        println!();

        match submission.outcome {
            Outcome::Continue => {
                for line in colored_keyboard(&session.keyboard()) {
                    println!("  {line}");
                }
                println!();
            }
            Outcome::Win { attempts_used } => {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!("  {}", win_message(attempts_used).bright_green().bold());
                println!(
                    "  Solved in {} {}",
                    attempts_used.to_string().bright_cyan().bold(),
                    if attempts_used == 1 { "guess" } else { "guesses" }
                );
                println!("{}", "═".repeat(60).bright_cyan());
                return Ok(Flow::Finished);
            }
            Outcome::Loss { target } => {
                println!(
                    "💀 Game over! The word was {}",
                    target.text().bright_yellow().bold()
                );
                if let Some(description) = game.dictionary().description(&target) {
                    println!("   {}", description.bright_black());
                }
                return Ok(Flow::Finished);
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
