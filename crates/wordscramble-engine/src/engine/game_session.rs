use crate::{
    ConfigError, Dictionary, GameConfig, Leaderboard, RootWordSource, RoundState, WordError,
    core::word::normalize_submission, engine::validation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Accepting submissions for the current root word.
    AwaitingInput,
    /// Every root word of the round was played; waiting for a player name.
    RoundComplete,
}

/// Outcome of a successful [`GameSession::submit_word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Submission {
    Accepted { word: String, points: usize },
    /// The submission was blank. Nothing changed and nothing needs reporting.
    Ignored,
}

/// Outcome of [`GameSession::advance_to_next_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Advance {
    NextWord,
    RoundComplete,
}

/// Error returned by a session action.
///
/// Like [`WordError`], every variant carries a user-facing
/// [`title`](Self::title) and [`message`](Self::message).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum ActionError {
    #[display("{_0}")]
    Rejected(WordError),
    #[display("round complete: a player name is required")]
    RoundComplete,
    #[display("round still in progress")]
    RoundInProgress,
    #[display("player name is empty")]
    EmptyPlayerName,
}

impl From<WordError> for ActionError {
    fn from(err: WordError) -> Self {
        Self::Rejected(err)
    }
}

impl ActionError {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Rejected(err) => err.title(),
            Self::RoundComplete => "Round complete",
            Self::RoundInProgress => "Round not finished",
            Self::EmptyPlayerName => "Name required",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected(err) => err.message(),
            Self::RoundComplete => "Enter your name to record your score".to_owned(),
            Self::RoundInProgress => {
                "Play through every root word before recording a score".to_owned()
            }
            Self::EmptyPlayerName => "Enter a name for the leaderboard".to_owned(),
        }
    }
}

/// A play session: the current round, the high score and the leaderboard.
///
/// The session is the only mutator of its round and leaderboard. Each action
/// runs to completion and either changes state or returns an error, never
/// both.
///
/// # Example
///
/// ```
/// use wordscramble_engine::{
///     Advance, GameConfig, GameSession, Submission, WordListDictionary, WordListRootWordSource,
/// };
///
/// let dictionary = WordListDictionary::new("en", ["milk", "slim"]);
/// let root_words = WordListRootWordSource::new(["silkworm"]);
/// let config = GameConfig { round_limit: 2, ..GameConfig::default() };
/// let mut session = GameSession::new(config, dictionary, root_words).unwrap();
///
/// assert!(session.submit_word(" Milk ").unwrap().is_accepted());
/// assert!(session.submit_word("milk").is_err());
/// assert_eq!(session.score(), 4);
///
/// assert_eq!(session.advance_to_next_word(), Ok(Advance::NextWord));
/// assert_eq!(session.advance_to_next_word(), Ok(Advance::RoundComplete));
///
/// let rank = session.confirm_player_name("ada").unwrap();
/// assert_eq!(session.leaderboard().entries()[rank].score, 4);
/// assert_eq!(session.score(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<D, S> {
    config: GameConfig,
    dictionary: D,
    root_words: S,
    round: RoundState,
    leaderboard: Leaderboard,
    high_score: usize,
    session_state: SessionState,
}

impl<D, S> GameSession<D, S>
where
    D: Dictionary,
    S: RootWordSource,
{
    /// Starts a session with a leaderboard holding only the configured seed entry.
    pub fn new(config: GameConfig, dictionary: D, root_words: S) -> Result<Self, ConfigError> {
        let leaderboard = Leaderboard::seeded(config.seed_entry.clone());
        Self::with_leaderboard(config, dictionary, root_words, leaderboard)
    }

    /// Starts a session on top of an existing leaderboard.
    ///
    /// The starting high score is the larger of the configured initial high
    /// score and the best score already on the leaderboard.
    pub fn with_leaderboard(
        config: GameConfig,
        dictionary: D,
        mut root_words: S,
        leaderboard: Leaderboard,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let high_score = leaderboard
            .top_score()
            .map_or(config.initial_high_score, |top| {
                top.max(config.initial_high_score)
            });
        let round = RoundState::new(root_words.pick_random_root_word());
        tracing::info!(
            root_word = round.root_word(),
            round_limit = config.round_limit,
            high_score,
            "session started"
        );
        Ok(Self {
            config,
            dictionary,
            root_words,
            round,
            leaderboard,
            high_score,
            session_state: SessionState::AwaitingInput,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        self.round.root_word()
    }

    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.round.used_words()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.round.score()
    }

    #[must_use]
    pub fn words_completed(&self) -> usize {
        self.round.words_completed()
    }

    #[must_use]
    pub fn round_limit(&self) -> usize {
        self.config.round_limit
    }

    #[must_use]
    pub fn high_score(&self) -> usize {
        self.high_score
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn into_leaderboard(self) -> Leaderboard {
        self.leaderboard
    }

    /// Submits raw player input.
    ///
    /// Input is normalized first; blank input is ignored. A rejected word
    /// leaves the session untouched.
    pub fn submit_word(&mut self, raw: &str) -> Result<Submission, ActionError> {
        if self.session_state.is_round_complete() {
            return Err(ActionError::RoundComplete);
        }

        let word = normalize_submission(raw);
        if word.is_empty() {
            return Ok(Submission::Ignored);
        }

        if let Err(err) = validation::validate(
            &word,
            &self.round,
            &self.dictionary,
            &self.config.language,
        ) {
            tracing::debug!(%word, root_word = self.round.root_word(), %err, "word rejected");
            return Err(err.into());
        }

        let points = self.round.accept_word(word.clone());
        self.high_score = self.high_score.max(self.round.score());
        tracing::debug!(%word, points, score = self.round.score(), "word accepted");
        Ok(Submission::Accepted { word, points })
    }

    /// Moves on from the current root word.
    ///
    /// Accepted words and score carry over to the next root word. Moving past
    /// the last root word of the round completes it; the session then waits
    /// for [`confirm_player_name`](Self::confirm_player_name).
    pub fn advance_to_next_word(&mut self) -> Result<Advance, ActionError> {
        if self.session_state.is_round_complete() {
            return Err(ActionError::RoundComplete);
        }

        if self.round.words_completed() + 1 >= self.config.round_limit {
            self.complete_round();
            return Ok(Advance::RoundComplete);
        }

        let root_word = self.root_words.pick_random_root_word();
        self.round.advance_to(root_word);
        tracing::debug!(
            root_word = self.round.root_word(),
            words_completed = self.round.words_completed(),
            "advanced to next root word"
        );
        Ok(Advance::NextWord)
    }

    fn complete_round(&mut self) {
        self.round.complete_word();
        self.session_state = SessionState::RoundComplete;
        tracing::info!(
            score = self.round.score(),
            words = self.round.used_words().len(),
            "round complete"
        );
    }

    /// Records the completed round under `name` and starts a new round.
    ///
    /// Returns the rank of the new leaderboard entry (0 is best).
    pub fn confirm_player_name(&mut self, name: &str) -> Result<usize, ActionError> {
        if !self.session_state.is_round_complete() {
            return Err(ActionError::RoundInProgress);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::EmptyPlayerName);
        }

        let score = self.round.score();
        let rank = self.leaderboard.insert(name, score);
        tracing::info!(name, score, rank, "leaderboard entry recorded");

        self.start_new_round();
        Ok(rank)
    }

    /// Abandons the current round and starts a new one.
    ///
    /// Available at any time. Progress is lost and nothing is recorded on the
    /// leaderboard.
    pub fn restart_round(&mut self) {
        tracing::info!(
            discarded_score = self.round.score(),
            words_completed = self.round.words_completed(),
            "round restarted"
        );
        self.start_new_round();
    }

    fn start_new_round(&mut self) {
        let root_word = self.root_words.pick_random_root_word();
        self.round.reset(root_word);
        self.session_state = SessionState::AwaitingInput;
    }
}
