use std::fmt;

use crate::{Dictionary, LetterPool, RoundState, core::word::contains_word};

/// Reason a submitted word was rejected.
///
/// Every rejection is recoverable and leaves the round untouched. The
/// [`title`](Self::title) and [`message`](Self::message) pair is meant for
/// user-facing alerts; [`Display`](std::fmt::Display) renders both.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::IsVariant)]
pub enum WordError {
    /// The word was already accepted in this round.
    Duplicate,
    /// The root word does not hold enough of the word's letters.
    Impossible { root_word: String },
    /// The dictionary does not know the word.
    Unrecognized,
    /// The word is the root word or a contiguous slice of it.
    Trivial,
}

impl WordError {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Duplicate => "Word used already",
            Self::Impossible { .. } => "Word not possible",
            Self::Unrecognized => "Word not recognized",
            Self::Trivial => "It's not that obvious",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Duplicate => "Be more original".to_owned(),
            Self::Impossible { root_word } => {
                format!("You can't spell that word from '{root_word}'!")
            }
            Self::Unrecognized => "You can't just make them up you know!".to_owned(),
            Self::Trivial => "Your answer is obviously (in) the root word".to_owned(),
        }
    }
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Returns whether `word` has not been accepted yet in this round.
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Returns whether `word` can be spelled from the letters of `root_word`.
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    LetterPool::new(root_word).can_spell(word)
}

/// Returns whether the dictionary recognizes `word` in `language`.
#[must_use]
pub fn is_real<D>(word: &str, dictionary: &D, language: &str) -> bool
where
    D: Dictionary + ?Sized,
{
    dictionary.is_word_valid(word, language)
}

/// Returns whether `word` is the root word or contained in it.
#[must_use]
pub fn is_trivial(word: &str, root_word: &str) -> bool {
    contains_word(root_word, word)
}

/// Applies the acceptance rules to a normalized, non-empty word.
///
/// The rules run in a fixed order and the first failure is returned:
/// originality, possibility, realness, then non-triviality.
///
/// # Example
///
/// ```
/// use wordscramble_engine::{RoundState, WordError, WordListDictionary, validate};
///
/// let dictionary = WordListDictionary::new("en", ["milk", "silk", "silkworm"]);
/// let round = RoundState::new("silkworm".to_owned());
///
/// assert_eq!(validate("milk", &round, &dictionary, "en"), Ok(()));
/// assert_eq!(validate("silk", &round, &dictionary, "en"), Err(WordError::Trivial));
/// assert!(validate("silkworms", &round, &dictionary, "en").unwrap_err().is_impossible());
/// ```
pub fn validate<D>(
    word: &str,
    round: &RoundState,
    dictionary: &D,
    language: &str,
) -> Result<(), WordError>
where
    D: Dictionary + ?Sized,
{
    if !is_original(word, round.used_words()) {
        return Err(WordError::Duplicate);
    }
    if !is_possible(word, round.root_word()) {
        return Err(WordError::Impossible {
            root_word: round.root_word().to_owned(),
        });
    }
    if !is_real(word, dictionary, language) {
        return Err(WordError::Unrecognized);
    }
    if is_trivial(word, round.root_word()) {
        return Err(WordError::Trivial);
    }
    Ok(())
}
