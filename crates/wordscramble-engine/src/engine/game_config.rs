use serde::{Deserialize, Serialize};

use crate::{ConfigError, Leaderboard, PlayerScoreEntry};

/// Tunable rules of a game session.
///
/// The defaults give five root words per round, English words, and a
/// leaderboard seeded with `ledoux: 25`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of root words played before the round completes.
    pub round_limit: usize,
    /// Language the dictionary is asked about.
    pub language: String,
    /// Entry a fresh leaderboard starts with.
    pub seed_entry: PlayerScoreEntry,
    /// High score shown before any word has been accepted.
    pub initial_high_score: usize,
}

impl GameConfig {
    pub const DEFAULT_ROUND_LIMIT: usize = 5;
    pub const DEFAULT_LANGUAGE: &'static str = "en";

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_limit == 0 {
            return Err(ConfigError::ZeroRoundLimit);
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_limit: Self::DEFAULT_ROUND_LIMIT,
            language: Self::DEFAULT_LANGUAGE.to_owned(),
            seed_entry: PlayerScoreEntry::default(),
            initial_high_score: Leaderboard::SEED_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.round_limit, 5);
        assert_eq!(config.language, "en");
        assert_eq!(config.seed_entry, PlayerScoreEntry::new("ledoux", 25));
        assert_eq!(config.initial_high_score, 25);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig {
            round_limit: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRoundLimit));

        let config = GameConfig {
            language: " ".to_owned(),
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyLanguage));
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: GameConfig = serde_json::from_str(r#"{"round_limit": 3}"#).unwrap();
        assert_eq!(config.round_limit, 3);
        assert_eq!(config.language, "en");
        assert_eq!(config.initial_high_score, 25);
    }
}
