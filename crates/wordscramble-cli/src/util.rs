use std::{
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Utc;
use wordscramble_engine::Leaderboard;

use crate::schema::leaderboard::LeaderboardFile;

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

pub fn write_json_file<T, P>(file_kind: &str, path: P, value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {} file: {}", file_kind, path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer)
        .with_context(|| format!("Failed to write newline after JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", path.display()))?;
    Ok(())
}

/// Read a saved leaderboard from a JSON file
pub fn read_leaderboard_file<P>(path: P) -> anyhow::Result<LeaderboardFile>
where
    P: AsRef<Path>,
{
    read_json_file("leaderboard", path)
}

/// Where the leaderboard lives between sessions.
///
/// Without a path the leaderboard only lasts for the session, and loading
/// yields the seeded default.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardStore {
    path: Option<PathBuf>,
}

impl LeaderboardStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the saved leaderboard, or the seeded default when nothing was saved yet.
    pub fn load(&self) -> anyhow::Result<Leaderboard> {
        let Some(path) = &self.path else {
            return Ok(Leaderboard::default());
        };
        if !path.exists() {
            tracing::info!(path = %path.display(), "no saved leaderboard, starting fresh");
            return Ok(Leaderboard::default());
        }
        let file = read_leaderboard_file(path)?;
        tracing::info!(
            path = %path.display(),
            entries = file.entries.len(),
            saved_at = %file.saved_at,
            "loaded leaderboard"
        );
        Ok(file.entries)
    }

    pub fn save(&self, leaderboard: &Leaderboard) -> anyhow::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = LeaderboardFile {
            saved_at: Utc::now(),
            entries: leaderboard.clone(),
        };
        write_json_file("leaderboard", path, &data)?;
        tracing::debug!(path = %path.display(), "saved leaderboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_without_path_is_in_memory() {
        let store = LeaderboardStore::default();
        assert!(store.path().is_none());
        assert_eq!(store.load().unwrap(), Leaderboard::default());

        let mut leaderboard = Leaderboard::default();
        leaderboard.insert("ada", 30);
        store.save(&leaderboard).unwrap();
        assert_eq!(store.load().unwrap(), Leaderboard::default());
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = LeaderboardStore::new(Some(dir.path().join("scores.json")));
        assert_eq!(store.load().unwrap(), Leaderboard::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scores.json");
        let store = LeaderboardStore::new(Some(path.clone()));

        let mut leaderboard = Leaderboard::default();
        leaderboard.insert("ada", 30);
        leaderboard.insert("bob", 25);
        store.save(&leaderboard).unwrap();

        assert!(path.exists());
        assert_eq!(store.load().unwrap(), leaderboard);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();

        let err = LeaderboardStore::new(Some(path)).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse leaderboard JSON file"));
    }
}
