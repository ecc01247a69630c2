use serde::{Deserialize, Serialize};

/// State of the round in progress.
///
/// Tracks the current root word, the words accepted so far (most recent
/// first), how many root words have been completed and the round score.
///
/// Accepted words and score carry over when the player advances to another
/// root word; they are only cleared by [`reset`](Self::reset), when the round
/// restarts or completes.
///
/// # Example
///
/// ```
/// use wordscramble_engine::RoundState;
///
/// let mut round = RoundState::new("silkworm".to_owned());
/// round.accept_word("milk".to_owned());
/// round.accept_word("slim".to_owned());
///
/// assert_eq!(round.used_words(), ["slim", "milk"]);
/// assert_eq!(round.score(), 8);
///
/// round.advance_to("albatross".to_owned());
/// assert_eq!(round.words_completed(), 1);
/// assert_eq!(round.score(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
    words_completed: usize,
    score: usize,
}

impl RoundState {
    /// Creates a fresh round starting at `root_word`.
    #[must_use]
    pub fn new(root_word: String) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
            words_completed: 0,
            score: 0,
        }
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recently accepted first.
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Number of root words the player has moved past in this round.
    #[must_use]
    pub fn words_completed(&self) -> usize {
        self.words_completed
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Records an accepted word and returns the points it earned.
    ///
    /// A word is worth one point per letter. The caller is responsible for
    /// validating the word first.
    pub fn accept_word(&mut self, word: String) -> usize {
        let points = word.chars().count();
        self.used_words.insert(0, word);
        self.score += points;
        points
    }

    /// Moves on to the next root word within the same round.
    pub fn advance_to(&mut self, root_word: String) {
        self.root_word = root_word;
        self.words_completed += 1;
    }

    /// Marks the last root word of the round as completed.
    ///
    /// Unlike [`advance_to`](Self::advance_to) the root word stays in place,
    /// since the next round will pick its own.
    pub fn complete_word(&mut self) {
        self.words_completed += 1;
    }

    /// Starts over with a new root word, discarding words and score.
    pub fn reset(&mut self, root_word: String) {
        *self = Self::new(root_word);
    }
}
