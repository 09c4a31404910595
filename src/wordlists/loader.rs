//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or from the embedded constants.

use crate::core::{Dictionary, DictionaryError, Entry, Word};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error loading a word list file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Parse one `WORD|description` line; a bare `WORD` has no description
///
/// Blank lines and `#` comments yield `None`, as do invalid words.
fn parse_line(line: &str) -> Option<Entry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (word, description) = trimmed.split_once('|').unwrap_or((trimmed, ""));
    match Word::new(word) {
        Ok(word) => Some(Entry {
            word,
            description: description.trim().to_string(),
        }),
        Err(e) => {
            warn!("skipping word list entry {word:?}: {e}");
            None
        }
    }
}

/// Load a dictionary from a file
///
/// Skips blank lines, `#` comments and invalid words.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Dictionary`] if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use brainrodle::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/daily.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = Dictionary::new(content.lines().filter_map(parse_line))?;
    debug!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Convert an embedded `(word, description)` slice to a dictionary
///
/// # Errors
/// Returns [`DictionaryError::Empty`] if no entry is a valid word.
///
/// # Examples
/// ```
/// use brainrodle::wordlists::loader::dictionary_from_slice;
/// use brainrodle::wordlists::DAILY;
///
/// let dict = dictionary_from_slice(DAILY).unwrap();
/// assert_eq!(dict.len(), DAILY.len());
/// ```
pub fn dictionary_from_slice(slice: &[(&str, &str)]) -> Result<Dictionary, DictionaryError> {
    Dictionary::new(slice.iter().filter_map(|&(word, description)| {
        Word::new(word).ok().map(|word| Entry {
            word,
            description: description.to_string(),
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_from_slice_converts_valid_words() {
        let input = &[("ratio", "likes"), ("sigma", ""), ("aura", "vibe")];
        let dict = dictionary_from_slice(input).unwrap();

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(0).unwrap().text(), "RATIO");
        assert_eq!(dict.get(2).unwrap().text(), "AURA");
    }

    #[test]
    fn dictionary_from_slice_skips_invalid() {
        let input = &[("ratio", ""), ("way too long!", ""), ("r4tio", ""), ("aura", "")];
        let dict = dictionary_from_slice(input).unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let input: &[(&str, &str)] = &[];
        assert!(dictionary_from_slice(input).is_err());
    }

    #[test]
    fn parse_line_variants() {
        assert!(parse_line("").is_none());
        assert!(parse_line("# comment").is_none());
        assert!(parse_line("nope!").is_none());

        let entry = parse_line(" RIZZ | Charisma ").unwrap();
        assert_eq!(entry.word.text(), "RIZZ");
        assert_eq!(entry.description, "Charisma");

        let bare = parse_line("aura").unwrap();
        assert_eq!(bare.description, "");
    }
}
