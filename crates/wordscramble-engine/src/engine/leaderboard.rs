use serde::{Deserialize, Serialize};

/// A player's result for one completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScoreEntry {
    pub name: String,
    pub score: usize,
}

impl PlayerScoreEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, score: usize) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl Default for PlayerScoreEntry {
    fn default() -> Self {
        Self::new(Leaderboard::SEED_NAME, Leaderboard::SEED_SCORE)
    }
}

/// Round results ranked by descending score.
///
/// The entries are sorted non-increasing by score at all times. A new entry
/// lands ahead of every existing entry with a lower or equal score, so the
/// most recent of several equal scores ranks first. The leaderboard only
/// grows.
///
/// # Example
///
/// ```
/// use wordscramble_engine::Leaderboard;
///
/// let mut leaderboard = Leaderboard::default(); // seeded with ledoux: 25
/// assert_eq!(leaderboard.insert("ada", 30), 0);
/// assert_eq!(leaderboard.insert("bob", 25), 1);
/// assert_eq!(leaderboard.insert("cy", 3), 3);
///
/// let names: Vec<_> = leaderboard.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["ada", "bob", "ledoux", "cy"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PlayerScoreEntry>", into = "Vec<PlayerScoreEntry>")]
pub struct Leaderboard {
    entries: Vec<PlayerScoreEntry>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::seeded(PlayerScoreEntry::default())
    }
}

impl From<Vec<PlayerScoreEntry>> for Leaderboard {
    /// Builds a leaderboard from stored entries, restoring the ranking.
    ///
    /// The sort is stable, so equal scores keep their stored order.
    fn from(mut entries: Vec<PlayerScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries }
    }
}

impl From<Leaderboard> for Vec<PlayerScoreEntry> {
    fn from(leaderboard: Leaderboard) -> Self {
        leaderboard.entries
    }
}

impl Leaderboard {
    pub const SEED_NAME: &'static str = "ledoux";
    pub const SEED_SCORE: usize = 25;

    /// Creates a leaderboard holding only `entry`.
    #[must_use]
    pub fn seeded(entry: PlayerScoreEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    /// Inserts a result and returns its rank (0 is best).
    pub fn insert(&mut self, name: impl Into<String>, score: usize) -> usize {
        let rank = self
            .entries
            .iter()
            .position(|entry| entry.score <= score)
            .unwrap_or(self.entries.len());
        self.entries.insert(rank, PlayerScoreEntry::new(name, score));
        rank
    }

    #[must_use]
    pub fn entries(&self) -> &[PlayerScoreEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerScoreEntry> + '_ {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score on the board, if any.
    #[must_use]
    pub fn top_score(&self) -> Option<usize> {
        self.entries.first().map(|entry| entry.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted_descending(leaderboard: &Leaderboard) -> bool {
        leaderboard
            .entries()
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score)
    }

    fn names(leaderboard: &Leaderboard) -> Vec<&str> {
        leaderboard.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_default_is_seeded() {
        let leaderboard = Leaderboard::default();
        assert_eq!(leaderboard.entries(), [PlayerScoreEntry::new("ledoux", 25)]);
        assert_eq!(leaderboard.top_score(), Some(25));
    }

    #[test]
    fn test_insert_lower_score_appends() {
        let mut leaderboard = Leaderboard::default();
        assert_eq!(leaderboard.insert("ada", 10), 1);
        assert_eq!(leaderboard.insert("bob", 5), 2);
        assert_eq!(names(&leaderboard), ["ledoux", "ada", "bob"]);
    }

    #[test]
    fn test_insert_higher_score_goes_first() {
        let mut leaderboard = Leaderboard::default();
        assert_eq!(leaderboard.insert("ada", 40), 0);
        assert_eq!(leaderboard.top_score(), Some(40));
    }

    #[test]
    fn test_equal_score_lands_ahead() {
        let mut leaderboard = Leaderboard::default();
        leaderboard.insert("ada", 10);
        assert_eq!(leaderboard.insert("bob", 10), 1);
        assert_eq!(leaderboard.insert("cy", 25), 0);
        assert_eq!(names(&leaderboard), ["cy", "ledoux", "bob", "ada"]);
    }

    #[test]
    fn test_sorted_after_any_insertions() {
        let mut leaderboard = Leaderboard::default();
        let scores = [3, 25, 0, 17, 25, 99, 3, 42, 1, 0, 26, 24];
        for (i, score) in scores.into_iter().enumerate() {
            leaderboard.insert(format!("p{i}"), score);
            assert!(is_sorted_descending(&leaderboard));
        }
        assert_eq!(leaderboard.len(), scores.len() + 1);
    }

    #[test]
    fn test_empty_leaderboard_insert() {
        let mut leaderboard: Leaderboard = Vec::new().into();
        assert!(leaderboard.is_empty());
        assert_eq!(leaderboard.top_score(), None);
        assert_eq!(leaderboard.insert("ada", 0), 0);
    }

    #[test]
    fn test_deserialize_restores_order() {
        let json = r#"[
            {"name": "a", "score": 5},
            {"name": "b", "score": 30},
            {"name": "c", "score": 5},
            {"name": "d", "score": 12}
        ]"#;
        let leaderboard: Leaderboard = serde_json::from_str(json).unwrap();
        assert!(is_sorted_descending(&leaderboard));
        assert_eq!(names(&leaderboard), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_serialize_as_entry_list() {
        let mut leaderboard = Leaderboard::default();
        leaderboard.insert("ada", 30);
        let value = serde_json::to_value(&leaderboard).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"name": "ada", "score": 30},
                {"name": "ledoux", "score": 25}
            ])
        );
    }
}
