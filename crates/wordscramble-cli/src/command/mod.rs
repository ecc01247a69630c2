use clap::{Parser, Subcommand};

use self::{leaderboard::ShowLeaderboardArg, play::PlayArg};

mod leaderboard;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the word game in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Print a saved leaderboard
    Leaderboard(#[clap(flatten)] ShowLeaderboardArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or_else(|| Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Leaderboard(arg) => leaderboard::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let args = CommandArgs::try_parse_from(["wordscramble"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_play_defaults_match_default_impl() {
        let args = CommandArgs::try_parse_from(["wordscramble", "play"]).unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play mode");
        };
        assert_eq!(arg, PlayArg::default());
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let result = CommandArgs::try_parse_from(["wordscramble", "play", "--seed", "xyz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_leaderboard_requires_file() {
        assert!(CommandArgs::try_parse_from(["wordscramble", "leaderboard"]).is_err());
        assert!(
            CommandArgs::try_parse_from(["wordscramble", "leaderboard", "scores.json"]).is_ok()
        );
    }
}
