use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wordscramble_engine::Leaderboard;

/// Leaderboard saved between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardFile {
    /// Timestamp of the last save (ISO 8601 format)
    pub saved_at: DateTime<Utc>,
    /// Ranked entries, best first
    pub entries: Leaderboard,
}
