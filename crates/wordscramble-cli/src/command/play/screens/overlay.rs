use ratatui::{
    Frame,
    widgets::{Block, Clear},
};

use crate::{
    command::play::PlaySession,
    view::widgets::{AlertDisplay, LeaderboardDisplay, NamePromptDisplay, popup_area},
};

/// Modal layer drawn on top of the play screen.
///
/// While an overlay is open, key input goes to it instead of the round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Overlay {
    Alert {
        title: String,
        message: String,
    },
    NamePrompt {
        name: String,
        error: Option<String>,
    },
    Leaderboard {
        highlight: Option<usize>,
    },
}

impl Overlay {
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Alert {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn name_prompt() -> Self {
        Self::NamePrompt {
            name: String::new(),
            error: None,
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>, session: &PlaySession) {
        match self {
            Self::Alert { title, message } => {
                let display = AlertDisplay::new(title, message).block(Block::bordered());
                let area = popup_area(frame.area(), display.width(), display.height());
                frame.render_widget(display, area);
            }
            Self::NamePrompt { name, error } => {
                let display = NamePromptDisplay::new(session.score(), name)
                    .error(error.as_deref())
                    .block(Block::bordered().title(" ROUND COMPLETE "));
                let area = popup_area(frame.area(), display.width(), display.height());
                frame.render_widget(display, area);
            }
            Self::Leaderboard { highlight } => {
                let display = LeaderboardDisplay::new(session.leaderboard())
                    .highlight(*highlight)
                    .block(Block::bordered().title(" LEADERBOARD "));
                let area = popup_area(frame.area(), display.width(), display.height());
                frame.render_widget(Clear, area);
                frame.render_widget(display, area);
            }
        }
    }
}
