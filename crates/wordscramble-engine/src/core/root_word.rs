use std::{fmt, fs, path::Path, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::IndexedRandom as _,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CorpusLoadError;

/// Root word used when the corpus holds no usable word.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Supplies a new root word on demand.
pub trait RootWordSource {
    /// Returns a lowercase root word for the next play.
    fn pick_random_root_word(&mut self) -> String;
}

impl<S> RootWordSource for &mut S
where
    S: RootWordSource + ?Sized,
{
    fn pick_random_root_word(&mut self) -> String {
        (**self).pick_random_root_word()
    }
}

impl<S> RootWordSource for Box<S>
where
    S: RootWordSource + ?Sized,
{
    fn pick_random_root_word(&mut self) -> String {
        (**self).pick_random_root_word()
    }
}

/// Seed for deterministic root word selection.
///
/// Using the same seed with the same corpus yields the same sequence of root
/// words. Serialized as a 32-character hex string.
///
/// # Example
///
/// ```
/// use wordscramble_engine::{RootWordSeed, RootWordSource as _, WordListRootWordSource};
///
/// let seed: RootWordSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// let words = ["silkworm", "albatross", "tenement"];
///
/// let mut a = WordListRootWordSource::with_seed(words, seed);
/// let mut b = WordListRootWordSource::with_seed(words, seed);
/// assert_eq!(a.pick_random_root_word(), b.pick_random_root_word());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootWordSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    #[display("invalid seed: expected 32 hex characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid seed: {_0:?} is not hex")]
    InvalidHex(#[error(not(source))] String),
}

impl FromStr for RootWordSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(SeedParseError::InvalidLength(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidHex(s.to_owned()));
        }
        let num =
            u128::from_str_radix(s, 16).map_err(|_| SeedParseError::InvalidHex(s.to_owned()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl fmt::Display for RootWordSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for RootWordSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RootWordSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<RootWordSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RootWordSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        RootWordSeed(seed)
    }
}

/// Root word source picking uniformly from a fixed word list.
///
/// Blank lines are dropped and words are lowercased. When no word remains,
/// every pick yields [`FALLBACK_ROOT_WORD`].
#[derive(Debug, Clone)]
pub struct WordListRootWordSource {
    rng: Pcg32,
    seed: RootWordSeed,
    words: Vec<String>,
}

impl WordListRootWordSource {
    /// Creates a source with a random seed.
    #[must_use]
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::with_seed(words, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic picks.
    #[must_use]
    pub fn with_seed<I, W>(words: I, seed: RootWordSeed) -> Self
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
            rng: Pcg32::from_seed(seed.0),
            seed,
            words,
        }
    }

    /// Loads a newline-separated corpus.
    ///
    /// A corpus that cannot be read is fatal: no source is created.
    pub fn from_path<P>(path: P, seed: RootWordSeed) -> Result<Self, CorpusLoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CorpusLoadError::new(path, e))?;
        let source = Self::with_seed(text.lines(), seed);
        tracing::debug!(
            path = %path.display(),
            words = source.words.len(),
            %seed,
            "loaded root word corpus"
        );
        Ok(source)
    }

    #[must_use]
    pub fn seed(&self) -> RootWordSeed {
        self.seed
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl RootWordSource for WordListRootWordSource {
    fn pick_random_root_word(&mut self) -> String {
        let word = self
            .words
            .choose(&mut self.rng)
            .map_or(FALLBACK_ROOT_WORD, String::as_str)
            .to_owned();
        tracing::debug!(root_word = %word, "picked root word");
        word
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn seed_from_bytes(bytes: [u8; 16]) -> RootWordSeed {
        RootWordSeed(bytes)
    }

    #[test]
    fn test_empty_corpus_falls_back() {
        let mut source = WordListRootWordSource::new(Vec::<String>::new());
        assert_eq!(source.pick_random_root_word(), FALLBACK_ROOT_WORD);

        let mut source = WordListRootWordSource::new(["", "   ", "\r"]);
        assert!(source.words().is_empty());
        assert_eq!(source.pick_random_root_word(), FALLBACK_ROOT_WORD);
    }

    #[test]
    fn test_picks_come_from_corpus() {
        let words = ["albatross", "Tenement", "silkworm"];
        let mut source = WordListRootWordSource::new(words);
        for _ in 0..50 {
            let word = source.pick_random_root_word();
            assert!(["albatross", "tenement", "silkworm"].contains(&word.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed = seed_from_bytes([
            0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
            0x77, 0x88,
        ]);
        let words: Vec<String> = (0..100).map(|i| format!("word{i}")).collect();

        let mut a = WordListRootWordSource::with_seed(&words, seed);
        let mut b = WordListRootWordSource::with_seed(&words, seed);
        for _ in 0..20 {
            assert_eq!(a.pick_random_root_word(), b.pick_random_root_word());
        }
    }

    #[test]
    fn test_from_path_missing_corpus_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            WordListRootWordSource::from_path(dir.path().join("start.txt"), rand::rng().random());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_reads_corpus() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "albatross\n\nsilkworm\n").unwrap();

        let source = WordListRootWordSource::from_path(file.path(), rand::rng().random()).unwrap();
        assert_eq!(source.words(), ["albatross", "silkworm"]);
    }

    #[test]
    fn test_seed_display_is_32_char_hex() {
        let seed = seed_from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
        assert_eq!(
            serde_json::to_string(&seed).unwrap(),
            "\"0123456789abcdeffedcba9876543210\""
        );
    }

    #[test]
    fn test_seed_parse_accepts_uppercase() {
        let seed: RootWordSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_seed_parse_errors() {
        assert_eq!(
            "abc".parse::<RootWordSeed>(),
            Err(SeedParseError::InvalidLength(3))
        );
        assert!(matches!(
            "ghijklmnopqrstuvwxyzghijklmnopqr".parse::<RootWordSeed>(),
            Err(SeedParseError::InvalidHex(_))
        ));

        let result: Result<RootWordSeed, _> = serde_json::from_str("\"\"");
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("invalid seed"));
    }

    #[test]
    fn test_seed_parse_rejects_sign() {
        for input in [
            "+0123456789abcdef0123456789abcde",
            "-0123456789abcdef0123456789abcde",
        ] {
            assert_eq!(
                input.parse::<RootWordSeed>(),
                Err(SeedParseError::InvalidHex(input.to_owned()))
            );
        }
    }
}
