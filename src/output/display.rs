//! Display functions for command results

use super::formatters::{colored_stored_row, create_progress_bar};
use crate::core::{Dictionary, MAX_ATTEMPTS, Word};
use crate::game::{Mode, ModeStats};
use crate::selector::{CoverageReport, ScheduledWord};
use chrono::NaiveDate;
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print a mode's stats record
pub fn print_stats(mode: Mode, stats: &ModeStats) {
    banner(&format!("{} STATISTICS", mode.to_string().to_uppercase()));

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Played:           {}", stats.games_played());
    println!(
        "   Win %:            {}",
        format!("{}%", stats.win_percentage()).bright_yellow().bold()
    );
    println!(
        "   Current streak:   {}",
        stats.current_streak().to_string().green()
    );
    let best_label = match mode {
        Mode::Daily => "Max streak:",
        Mode::Unlimited => "Best streak:",
    };
    println!(
        "   {best_label:<18}{}",
        stats.best_streak().to_string().yellow()
    );

    if let Some(distribution) = stats.distribution() {
        println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
        let most = distribution.values().copied().max().unwrap_or(0);
        for attempts in 1..=MAX_ATTEMPTS {
            let count = u8::try_from(attempts)
                .ok()
                .and_then(|key| distribution.get(&key))
                .copied()
                .unwrap_or(0);
            let bar = create_progress_bar(f64::from(count), f64::from(most), 30);
            println!("   {attempts}: {} {count:4}", bar.green());
        }
    }

    if !stats.last_guesses().is_empty() {
        println!("\n🧩 {}", "Last game:".bright_cyan().bold());
        for row in stats.last_guesses() {
            println!("   {}", colored_stored_row(row));
        }
    }
    println!();
}

/// Print every word of a dictionary with its description
pub fn print_word_list(mode: Mode, dictionary: &Dictionary) {
    banner(&format!(
        "{} WORD LIST ({} words)",
        mode.to_string().to_uppercase(),
        dictionary.len()
    ));
    println!();

    let width = dictionary.words().map(Word::len).max().unwrap_or(0);
    for entry in dictionary.entries() {
        if entry.description.is_empty() {
            println!("  {}", entry.word.text().bright_white().bold());
        } else {
            println!(
                "  {:<width$}  {}",
                entry.word.text().bright_white().bold(),
                entry.description.bright_black()
            );
        }
    }
    println!();
}

/// Print the daily word for one date
pub fn print_daily_word(date: NaiveDate, word: &Word, description: Option<&str>) {
    println!(
        "{}: {}",
        date.format("%Y-%m-%d").to_string().cyan(),
        word.text().bright_yellow().bold()
    );
    if let Some(description) = description {
        println!("  {}", description.bright_black());
    }
}

/// Print a daily schedule, one date per line
pub fn print_schedule(schedule: &[ScheduledWord]) {
    banner("DAILY SCHEDULE");
    println!();
    for entry in schedule {
        println!(
            "  {}  {}",
            entry.date.format("%Y-%m-%d %a").to_string().cyan(),
            entry.word.bright_white()
        );
    }
}

/// Print a coverage report for a schedule
pub fn print_coverage(report: &CoverageReport) {
    banner("COVERAGE");

    let pct = if report.dictionary_size == 0 {
        0.0
    } else {
        report.distinct_words as f64 / report.dictionary_size as f64 * 100.0
    };

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Days:             {}", report.days);
    println!(
        "   Distinct words:   {} / {} ({})",
        report.distinct_words,
        report.dictionary_size,
        format!("{pct:.1}%").bright_yellow().bold()
    );
    if let Some((word, count)) = &report.most_frequent {
        println!("   Most frequent:    {} ({count}x)", word.yellow());
    }
    if !report.never_picked.is_empty() {
        println!(
            "   Never picked:     {}",
            report.never_picked.join(", ").bright_black()
        );
    }
    println!();
}
