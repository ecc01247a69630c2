//! Game rules and session state.
//!
//! This module implements the word game on top of the building blocks in
//! [`crate::core`]:
//!
//! - [`validate`] - The acceptance rules applied to every submitted word
//! - [`RoundState`] - Root word, accepted words, progress and score of a round
//! - [`Leaderboard`] - Ranked results of completed rounds
//! - [`GameConfig`] - Round limit, language and leaderboard seed
//! - [`GameSession`] - Controller mapping player actions onto the above
//!
//! # Game Flow
//!
//! 1. The session picks a root word from its [`RootWordSource`](crate::RootWordSource)
//! 2. The player submits words; each is normalized and validated, and accepted
//!    words score one point per letter
//! 3. The player advances to a new root word; accepted words and score carry over
//! 4. Advancing past the last root word of the round completes it
//! 5. The player enters a name, the score is ranked on the leaderboard and a
//!    new round starts
//!
//! Restarting abandons the round at any point without touching the leaderboard.

pub use self::{game_config::*, game_session::*, leaderboard::*, round_state::*, validation::*};

mod game_config;
mod game_session;
mod leaderboard;
mod round_state;
mod validation;
