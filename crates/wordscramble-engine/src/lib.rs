//! Round and validation engine for a single-player word-building game.
//!
//! The player is given a root word and submits words spelled from its letters.
//! A submission is accepted only when it is original, possible, real and not
//! trivially contained in the root word. Accepted words score their length,
//! rounds last a fixed number of root words, and a finished round is recorded
//! on a session-wide [`Leaderboard`].
//!
//! - [`core`] - Word-level building blocks and the two injected capabilities
//!   ([`Dictionary`] and [`RootWordSource`])
//! - [`engine`] - Validation rules, round state, leaderboard and the
//!   [`GameSession`] controller that ties them together

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Raised when the root-word corpus cannot be loaded.
///
/// The game cannot run without root words, so this error aborts startup.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to load word list {path}")]
pub struct CorpusLoadError {
    path: String,
    source: std::io::Error,
}

impl CorpusLoadError {
    pub(crate) fn new(path: &std::path::Path, source: std::io::Error) -> Self {
        Self {
            path: path.display().to_string(),
            source,
        }
    }

    /// Returns the path of the word list that failed to load.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Raised when a [`GameConfig`] cannot start a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// A round must play at least one root word.
    #[display("round limit must be at least 1")]
    ZeroRoundLimit,
    /// The dictionary needs a language to answer for.
    #[display("language must not be empty")]
    EmptyLanguage,
}
