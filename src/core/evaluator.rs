//! Guess validation and scoring against a dictionary

use super::{Dictionary, Feedback, GuessError, Word};
use log::debug;

/// Validate a raw guess and score it against `target`
///
/// Checks run in the order a player sees them: wrong length first, then
/// malformed letters, then dictionary membership.
///
/// # Errors
/// - [`GuessError::LengthMismatch`] if the guess length differs from the target's
/// - [`GuessError::InvalidWord`] if the guess contains non-letters
/// - [`GuessError::NotInDictionary`] if the guess is not a playable word
///
/// # Examples
/// ```
/// use brainrodle::core::{Dictionary, Word, evaluate};
///
/// let dict = Dictionary::from_words(["RATIO", "SIGMA"].map(|w| Word::new(w).unwrap())).unwrap();
/// let target = Word::new("ratio").unwrap();
///
/// let (guess, feedback) = evaluate(&target, "sigma", &dict).unwrap();
/// assert_eq!(guess.text(), "SIGMA");
/// assert!(!feedback.is_win());
/// ```
pub fn evaluate(
    target: &Word,
    raw_guess: &str,
    dictionary: &Dictionary,
) -> Result<(Word, Feedback), GuessError> {
    let trimmed = raw_guess.trim();
    let actual = trimmed.chars().count();
    if actual != target.len() {
        return Err(GuessError::LengthMismatch {
            expected: target.len(),
            actual,
        });
    }

    let guess = Word::new(trimmed)?;
    if !dictionary.contains(&guess) {
        debug!("rejected {guess}: not in dictionary");
        return Err(GuessError::NotInDictionary(guess.text().to_string()));
    }

    let feedback = Feedback::calculate(&guess, target)?;
    Ok((guess, feedback))
}
