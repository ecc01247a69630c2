/// Normalizes raw player input before validation.
///
/// Surrounding whitespace (including newlines) is trimmed and the remaining
/// text is lowercased.
///
/// # Example
///
/// ```
/// use wordscramble_engine::normalize_submission;
///
/// assert_eq!(normalize_submission("  Worm\n"), "worm");
/// assert_eq!(normalize_submission(" \t "), "");
/// ```
#[must_use]
pub fn normalize_submission(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Multiset of the letters available in a root word.
///
/// Each letter of the root word can be used at most once per spelled word, so
/// a root word with a single `t` cannot supply a word needing two.
///
/// # Example
///
/// ```
/// use wordscramble_engine::LetterPool;
///
/// let pool = LetterPool::new("tenet");
/// assert!(pool.can_spell("teen"));
/// assert!(!pool.can_spell("teeth"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    #[must_use]
    pub fn new(root_word: &str) -> Self {
        Self {
            letters: root_word.chars().collect(),
        }
    }

    /// Returns whether `word` can be spelled from this pool.
    ///
    /// Works on a copy of the pool: for each letter of `word` in order, one
    /// matching occurrence is removed, and the check fails at the first letter
    /// that has no occurrence left.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.letters.clone();
        for letter in word.chars() {
            let Some(pos) = remaining.iter().position(|&c| c == letter) else {
                return false;
            };
            remaining.swap_remove(pos);
        }
        true
    }

    /// Number of letters in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Returns whether `word` appears in `root_word` as a contiguous run of letters.
///
/// This also holds when `word` equals `root_word`.
#[must_use]
pub fn contains_word(root_word: &str, word: &str) -> bool {
    root_word.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_submission("SiLk"), "silk");
        assert_eq!(normalize_submission("\n  milk \r\n"), "milk");
        assert_eq!(normalize_submission(""), "");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_submission(" ice cream "), "ice cream");
    }

    #[test]
    fn test_can_spell_respects_letter_counts() {
        let pool = LetterPool::new("tenet");
        // t:2 e:2 n:1
        assert!(pool.can_spell("teen"));
        assert!(pool.can_spell("tent"));
        assert!(pool.can_spell("net"));
        assert!(!pool.can_spell("tenets")); // no 's'
        assert!(!pool.can_spell("teeth")); // no 'h'
        assert!(!pool.can_spell("nene")); // only one 'n'
        assert!(!pool.can_spell("tttt"));
    }

    #[test]
    fn test_can_spell_rejects_absent_letters() {
        let pool = LetterPool::new("silkworm");
        assert!(!pool.can_spell("xyz"));
        assert!(!pool.can_spell("silkworms"));
        assert!(!pool.can_spell("a"));
    }

    #[test]
    fn test_can_spell_ignores_letter_order() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("milk"));
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("mrowklis"));
    }

    #[test]
    fn test_can_spell_does_not_mutate_pool() {
        let pool = LetterPool::new("abc");
        assert!(pool.can_spell("abc"));
        assert!(pool.can_spell("abc"));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_empty_pool() {
        let pool = LetterPool::new("");
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }

    #[test]
    fn test_contains_word_is_contiguous_only() {
        assert!(contains_word("albatross", "albatross"));
        assert!(contains_word("albatross", "bat"));
        assert!(contains_word("albatross", "ross"));
        // scattered subsequences are not contained
        assert!(!contains_word("albatross", "bass"));
        assert!(!contains_word("albatross", "alto"));
    }
}
