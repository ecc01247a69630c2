use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};
use wordscramble_engine::{Advance, Leaderboard, Submission};

use crate::{
    command::play::{PlaySession, screens::Overlay},
    util::LeaderboardStore,
    view::widgets::{
        KeyBindingDisplay, KeyHelp, RootWordDisplay, RoundStats, RoundStatsDisplay,
        UsedWordsDisplay,
    },
};

#[derive(Debug)]
pub struct PlayScreen {
    session: PlaySession,
    store: LeaderboardStore,
    input: String,
    overlay: Option<Overlay>,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(session: PlaySession, store: LeaderboardStore) -> Self {
        Self {
            session,
            store,
            input: String::new(),
            overlay: None,
            is_exiting: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.is_exiting
    }

    pub fn into_parts(self) -> (Leaderboard, LeaderboardStore) {
        (self.session.into_leaderboard(), self.store)
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let stats_display =
            RoundStatsDisplay::new(RoundStats::from_session(&self.session)).block(Block::bordered());
        let root_word_display = RootWordDisplay::new(self.session.root_word(), &self.input)
            .show_cursor(self.overlay.is_none())
            .block(Block::bordered().title(" ROOT WORD "));
        let used_words_display = UsedWordsDisplay::new(self.session.used_words())
            .block(Block::bordered().title(" YOUR WORDS "));
        let help_display = KeyBindingDisplay::new(self.key_help());

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let [left_area, stats_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(stats_display.width()),
        ])
        .areas(main_area);
        let [stats_area, _] = Layout::vertical([
            Constraint::Length(stats_display.height()),
            Constraint::Fill(1),
        ])
        .areas(stats_area);
        let [root_word_area, used_words_area] = Layout::vertical([
            Constraint::Length(root_word_display.height()),
            Constraint::Fill(1),
        ])
        .areas(left_area);

        frame.render_widget(root_word_display, root_word_area);
        frame.render_widget(used_words_display, used_words_area);
        frame.render_widget(stats_display, stats_area);
        frame.render_widget(help_display, help_area);

        if let Some(overlay) = &self.overlay {
            overlay.draw(frame, &self.session);
        }
    }

    fn key_help(&self) -> KeyHelp {
        match &self.overlay {
            None => KeyHelp::Round,
            Some(Overlay::NamePrompt { .. }) => KeyHelp::NamePrompt,
            Some(Overlay::Alert { .. } | Overlay::Leaderboard { .. }) => KeyHelp::Dismiss,
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_press_event() else {
            return;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.is_exiting = true,
                KeyCode::Char('r') => self.restart_round(),
                KeyCode::Char('l') => self.toggle_leaderboard(),
                _ => {}
            }
            return;
        }

        self.overlay = match self.overlay.take() {
            None => self.handle_round_key(key),
            Some(overlay) => self.handle_overlay_key(overlay, key),
        };
    }

    fn handle_round_key(&mut self, key: KeyEvent) -> Option<Overlay> {
        match key.code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => _ = self.input.pop(),
            KeyCode::Enter => return self.submit_input(),
            KeyCode::Tab => return self.advance(),
            KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
        None
    }

    fn handle_overlay_key(&mut self, overlay: Overlay, key: KeyEvent) -> Option<Overlay> {
        match overlay {
            Overlay::NamePrompt { mut name, error } => match key.code {
                KeyCode::Char(c) => {
                    name.push(c);
                    Some(Overlay::NamePrompt { name, error })
                }
                KeyCode::Backspace => {
                    name.pop();
                    Some(Overlay::NamePrompt { name, error })
                }
                KeyCode::Enter => self.confirm_name(name),
                _ => Some(Overlay::NamePrompt { name, error }),
            },
            Overlay::Alert { .. } | Overlay::Leaderboard { .. } => match key.code {
                KeyCode::Enter | KeyCode::Esc => None,
                _ => Some(overlay),
            },
        }
    }

    fn submit_input(&mut self) -> Option<Overlay> {
        match self.session.submit_word(&self.input) {
            Ok(Submission::Accepted { .. }) => {
                self.input.clear();
                None
            }
            Ok(Submission::Ignored) => None,
            Err(err) => Some(Overlay::alert(err.title(), err.message())),
        }
    }

    fn advance(&mut self) -> Option<Overlay> {
        match self.session.advance_to_next_word() {
            Ok(Advance::NextWord) => {
                self.input.clear();
                None
            }
            Ok(Advance::RoundComplete) => {
                self.input.clear();
                Some(Overlay::name_prompt())
            }
            Err(err) => Some(Overlay::alert(err.title(), err.message())),
        }
    }

    fn confirm_name(&mut self, name: String) -> Option<Overlay> {
        match self.session.confirm_player_name(&name) {
            Ok(rank) => {
                if let Err(err) = self.store.save(self.session.leaderboard()) {
                    tracing::error!(error = ?err, "failed to save leaderboard");
                    return Some(Overlay::alert("Save failed", format!("{err:#}")));
                }
                Some(Overlay::Leaderboard {
                    highlight: Some(rank),
                })
            }
            Err(err) => Some(Overlay::NamePrompt {
                name,
                error: Some(err.message()),
            }),
        }
    }

    fn restart_round(&mut self) {
        self.session.restart_round();
        self.input.clear();
        self.overlay = None;
    }

    fn toggle_leaderboard(&mut self) {
        self.overlay = match self.overlay.take() {
            None => Some(Overlay::Leaderboard { highlight: None }),
            Some(Overlay::Leaderboard { .. }) => None,
            Some(overlay) => Some(overlay),
        };
    }
}
