//! Formatting utilities for terminal output

use crate::core::{GuessRow, KEYBOARD_ROWS, KeyboardState, LetterState, Verdict};
use colored::{ColoredString, Colorize};

/// Colored tile for one letter of a scored guess
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as a line of colored tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.guess
        .text()
        .chars()
        .zip(row.feedback.verdicts())
        .map(|(letter, &verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// A stored letter-then-glyph row (`R🟩A🟨`) as colored tiles
///
/// Rows that do not have that shape are returned unchanged.
#[must_use]
pub fn colored_stored_row(row: &str) -> String {
    match split_stored_row(row) {
        Some(tiles) => tiles
            .into_iter()
            .map(|(letter, verdict)| tile(letter, verdict).to_string())
            .collect(),
        None => row.to_string(),
    }
}

/// Split a stored row back into letters and verdicts
#[must_use]
pub fn split_stored_row(row: &str) -> Option<Vec<(char, Verdict)>> {
    let chars: Vec<char> = row.chars().collect();
    if chars.is_empty() || chars.len() % 2 != 0 {
        return None;
    }

    chars
        .chunks_exact(2)
        .map(|pair| {
            let letter = pair[0];
            let verdict = Verdict::from_glyph(pair[1])?;
            letter.is_ascii_alphabetic().then_some((letter, verdict))
        })
        .collect()
}

/// The on-screen keyboard as three lines of colored keys
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|key| {
                    let text = format!(" {key} ");
                    match keyboard.state(key) {
                        LetterState::Correct => text.black().on_green().to_string(),
                        LetterState::Present => text.black().on_yellow().to_string(),
                        LetterState::Absent => text.bright_black().to_string(),
                        LetterState::Unknown => text.white().to_string(),
                    }
                })
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = (((value / max) * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Headline for a win after `attempts` guesses
#[must_use]
pub const fn win_message(attempts: usize) -> &'static str {
    match attempts {
        1 => "🏆 Genius! First try!",
        2 => "⭐ Magnificent!",
        3 => "💫 Impressive!",
        4 => "✨ Splendid!",
        5 => "👍 Great!",
        _ => "😅 Phew!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn split_stored_row_roundtrip() {
        let tiles = split_stored_row("R🟩I🟨Z⬛").unwrap();
        assert_eq!(
            tiles,
            vec![
                ('R', Verdict::Correct),
                ('I', Verdict::Present),
                ('Z', Verdict::Absent)
            ]
        );
    }

    #[test]
    fn split_stored_row_rejects_other_text() {
        assert!(split_stored_row("").is_none());
        assert!(split_stored_row("RATIO").is_none());
        assert!(split_stored_row("🟩R").is_none());
        // Feedback letters are not tile glyphs
        assert!(split_stored_row("RGAY").is_none());
        assert!(split_stored_row("R🟩A-").is_none());
        assert_eq!(colored_stored_row("RGAY"), "RGAY");
    }

    #[test]
    fn win_message_by_attempts() {
        assert!(win_message(1).contains("First try"));
        assert_eq!(win_message(6), win_message(9));
    }
}
