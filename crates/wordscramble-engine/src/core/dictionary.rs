use std::{collections::HashSet, fs, path::Path};

use crate::CorpusLoadError;

/// Oracle answering whether a word is a real word of a language.
///
/// The session asks the oracle synchronously while validating a submission,
/// so implementations should answer from memory.
pub trait Dictionary {
    /// Returns whether `word` is recognized in the dictionary of `language`.
    fn is_word_valid(&self, word: &str, language: &str) -> bool;
}

impl<D> Dictionary for &D
where
    D: Dictionary + ?Sized,
{
    fn is_word_valid(&self, word: &str, language: &str) -> bool {
        (**self).is_word_valid(word, language)
    }
}

impl<D> Dictionary for Box<D>
where
    D: Dictionary + ?Sized,
{
    fn is_word_valid(&self, word: &str, language: &str) -> bool {
        (**self).is_word_valid(word, language)
    }
}

/// Dictionary backed by an in-memory word list for a single language.
///
/// Words are stored lowercased, so lookups are case-insensitive. Words asked
/// for in any other language are never valid.
///
/// # Example
///
/// ```
/// use wordscramble_engine::{Dictionary, WordListDictionary};
///
/// let dictionary = WordListDictionary::new("en", ["milk", "Worm"]);
/// assert!(dictionary.is_word_valid("worm", "en"));
/// assert!(!dictionary.is_word_valid("wrom", "en"));
/// assert!(!dictionary.is_word_valid("milk", "fr"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    #[must_use]
    pub fn new<I, W>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            language: language.into(),
            words,
        }
    }

    /// Loads a newline-separated word list.
    pub fn from_path<P>(language: impl Into<String>, path: P) -> Result<Self, CorpusLoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CorpusLoadError::new(path, e))?;
        let dictionary = Self::new(language, text.lines());
        tracing::debug!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_word_valid(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary = WordListDictionary::new("en", ["Silk", "worm"]);
        assert!(dictionary.is_word_valid("silk", "en"));
        assert!(dictionary.is_word_valid("SILK", "en"));
        assert!(dictionary.is_word_valid("Worm", "en"));
    }

    #[test]
    fn test_other_language_is_never_valid() {
        let dictionary = WordListDictionary::new("en", ["silk"]);
        assert!(!dictionary.is_word_valid("silk", "de"));
        assert_eq!(dictionary.language(), "en");
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let dictionary = WordListDictionary::new("en", ["", "  ", "milk\r"]);
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.is_word_valid("milk", "en"));
        assert!(!dictionary.is_word_valid("", "en"));
    }

    #[test]
    fn test_from_path_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "milk\nworm\n\nsilk").unwrap();

        let dictionary = WordListDictionary::from_path("en", file.path()).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.is_word_valid("worm", "en"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = WordListDictionary::from_path("en", &path).unwrap_err();
        assert_eq!(err.path(), path.display().to_string());
    }

    #[test]
    fn test_borrowed_dictionary_delegates() {
        fn knows_milk<D: Dictionary>(dictionary: D) -> bool {
            dictionary.is_word_valid("milk", "en")
        }

        let dictionary = WordListDictionary::new("en", ["milk"]);
        assert!(knows_milk(&dictionary));
        let boxed: Box<dyn Dictionary> = Box::new(dictionary);
        assert!(knows_milk(boxed));
    }
}
