//! Fixed word dictionary for one game mode

use super::Word;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error building a dictionary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid words")]
    Empty,
}

/// A dictionary word with its short description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: Word,
    pub description: String,
}

/// Ordered, immutable set of playable words
///
/// Order matters: the daily selector maps a fraction onto an index of this list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<Entry>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of duplicate words
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if no entries are given.
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Result<Self, DictionaryError> {
        let mut kept = Vec::new();
        let mut index = FxHashMap::default();

        for entry in entries {
            let text = entry.word.text().to_string();
            if index.contains_key(&text) {
                continue;
            }
            index.insert(text, kept.len());
            kept.push(entry);
        }

        if kept.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            entries: kept,
            index,
        })
    }

    /// Build a dictionary from bare words with empty descriptions
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if `words` is empty.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        Self::new(words.into_iter().map(|word| Entry {
            word,
            description: String::new(),
        }))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries; never true for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Word at `index`, if in range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.entries.get(index).map(|e| &e.word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.text())
    }

    /// Description of a word, or `None` if the word is unknown or undescribed
    #[must_use]
    pub fn description(&self, word: &Word) -> Option<&str> {
        self.index
            .get(word.text())
            .map(|&i| self.entries[i].description.as_str())
            .filter(|d| !d.is_empty())
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|e| &e.word)
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().map(|w| Word::new(*w).unwrap())).unwrap()
    }

    #[test]
    fn dictionary_keeps_order_and_dedupes() {
        let dict = dictionary(&["ratio", "sigma", "RATIO", "aura"]);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(0).unwrap().text(), "RATIO");
        assert_eq!(dict.get(2).unwrap().text(), "AURA");
        assert!(dict.get(3).is_none());
    }

    #[test]
    fn dictionary_contains() {
        let dict = dictionary(&["ratio", "sigma"]);
        assert!(dict.contains(&Word::new("Sigma").unwrap()));
        assert!(!dict.contains(&Word::new("alpha").unwrap()));
    }

    #[test]
    fn dictionary_rejects_empty() {
        assert_eq!(
            Dictionary::from_words(Vec::new()).unwrap_err(),
            DictionaryError::Empty
        );
    }

    #[test]
    fn dictionary_descriptions() {
        let dict = Dictionary::new([
            Entry {
                word: Word::new("ratio").unwrap(),
                description: "Getting more likes".to_string(),
            },
            Entry {
                word: Word::new("aura").unwrap(),
                description: String::new(),
            },
        ])
        .unwrap();

        assert_eq!(
            dict.description(&Word::new("ratio").unwrap()),
            Some("Getting more likes")
        );
        assert_eq!(dict.description(&Word::new("aura").unwrap()), None);
        assert_eq!(dict.description(&Word::new("beta").unwrap()), None);
    }
}
