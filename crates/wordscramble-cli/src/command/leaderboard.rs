use std::path::PathBuf;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ShowLeaderboardArg {
    /// Leaderboard JSON file written by `play --leaderboard`
    file: PathBuf,
}

pub(crate) fn run(arg: &ShowLeaderboardArg) -> anyhow::Result<()> {
    let ShowLeaderboardArg { file } = arg;
    let data = util::read_leaderboard_file(file)?;

    println!("Leaderboard saved at {}", data.saved_at.to_rfc3339());
    println!();
    println!("{:>4}  {:<24} {:>6}", "RANK", "NAME", "SCORE");
    for (rank, entry) in data.entries.iter().enumerate() {
        println!("{:>4}  {:<24} {:>6}", rank + 1, entry.name, entry.score);
    }

    Ok(())
}
