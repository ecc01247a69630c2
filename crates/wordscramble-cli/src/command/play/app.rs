use crossterm::event::Event;
use ratatui::Frame;
use wordscramble_engine::Leaderboard;

use crate::{
    command::play::{PlaySession, screens::PlayScreen},
    tui::App,
    util::LeaderboardStore,
};

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(session: PlaySession, store: LeaderboardStore) -> Self {
        Self {
            screen: PlayScreen::new(session, store),
        }
    }

    pub fn into_parts(self) -> (Leaderboard, LeaderboardStore) {
        self.screen.into_parts()
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, event: &Event) {
        self.screen.handle_event(event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
