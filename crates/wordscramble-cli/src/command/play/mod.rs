use std::path::PathBuf;

use anyhow::Context as _;
use rand::Rng as _;
use wordscramble_engine::{
    GameConfig, GameSession, PlayerScoreEntry, RootWordSeed, WordListDictionary,
    WordListRootWordSource,
};

use crate::{command::play::app::PlayApp, logging, tui::Tui, util::LeaderboardStore};

mod app;
mod screens;

pub(crate) type PlaySession = GameSession<WordListDictionary, WordListRootWordSource>;

const DEFAULT_ROOT_WORDS: &str = "./data/start.txt";
const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub(crate) struct PlayArg {
    /// Newline-separated list of root words
    #[clap(long, default_value = DEFAULT_ROOT_WORDS)]
    root_words: PathBuf,
    /// Newline-separated dictionary used to recognize words
    #[clap(long, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,
    /// Language of the dictionary
    #[clap(long, default_value = GameConfig::DEFAULT_LANGUAGE)]
    language: String,
    /// Number of root words per round
    #[clap(long, default_value_t = GameConfig::DEFAULT_ROUND_LIMIT)]
    round_limit: usize,
    /// Seed for root word selection (32 hex characters)
    #[clap(long)]
    seed: Option<RootWordSeed>,
    /// JSON file to load the leaderboard from and save it to
    #[clap(long)]
    leaderboard: Option<PathBuf>,
    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            root_words: PathBuf::from(DEFAULT_ROOT_WORDS),
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            language: GameConfig::DEFAULT_LANGUAGE.to_owned(),
            round_limit: GameConfig::DEFAULT_ROUND_LIMIT,
            seed: None,
            leaderboard: None,
            log_file: None,
        }
    }
}

impl PlayArg {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            round_limit: self.round_limit,
            language: self.language.clone(),
            seed_entry: PlayerScoreEntry::default(),
            initial_high_score: GameConfig::default().initial_high_score,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    logging::init(arg.log_file.as_deref())?;

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let root_words = WordListRootWordSource::from_path(&arg.root_words, seed)
        .context("Cannot start without a root word list")?;
    let dictionary = WordListDictionary::from_path(&arg.language, &arg.dictionary)
        .context("Cannot start without a dictionary")?;

    let store = LeaderboardStore::new(arg.leaderboard.clone());
    let leaderboard = store.load()?;
    let session =
        GameSession::with_leaderboard(arg.game_config(), dictionary, root_words, leaderboard)
            .context("Invalid game configuration")?;
    tracing::info!(%seed, leaderboard = ?store.path(), "starting play");

    let mut app = PlayApp::new(session, store);
    Tui::new().run(&mut app)?;

    let (leaderboard, store) = app.into_parts();
    store.save(&leaderboard)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[clap(flatten)]
        play: PlayArg,
    }

    fn parse(args: &[&str]) -> Result<PlayArg, clap::Error> {
        TestArgs::try_parse_from(std::iter::once("play").chain(args.iter().copied()))
            .map(|args| args.play)
    }

    #[test]
    fn test_play_options() {
        let arg = parse(&[
            "--round-limit",
            "3",
            "--language",
            "de",
            "--seed",
            "0123456789abcdeffedcba9876543210",
            "--leaderboard",
            "scores.json",
        ])
        .unwrap();
        assert_eq!(arg.round_limit, 3);
        assert_eq!(arg.language, "de");
        assert_eq!(
            arg.seed.map(|seed| seed.to_string()).as_deref(),
            Some("0123456789abcdeffedcba9876543210")
        );
        assert_eq!(arg.leaderboard.as_deref(), Some(Path::new("scores.json")));
        assert_eq!(arg.root_words, Path::new(DEFAULT_ROOT_WORDS));
    }

    #[test]
    fn test_game_config_follows_options() {
        let arg = parse(&["--round-limit", "2", "--language", "fr"]).unwrap();
        let config = arg.game_config();
        assert_eq!(config.round_limit, 2);
        assert_eq!(config.language, "fr");
        assert_eq!(config.seed_entry, PlayerScoreEntry::default());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_signed_seed_is_rejected() {
        assert!(parse(&["--seed", "+0123456789abcdef0123456789abcde"]).is_err());
    }
}
