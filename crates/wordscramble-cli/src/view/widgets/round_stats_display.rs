use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use wordscramble_engine::{Dictionary, GameSession, RootWordSource};

use crate::view::widgets::style;

/// Figures shown next to the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStats {
    pub score: usize,
    pub high_score: usize,
    pub words_completed: usize,
    pub round_limit: usize,
    pub accepted: usize,
}

impl RoundStats {
    pub fn from_session<D, S>(session: &GameSession<D, S>) -> Self
    where
        D: Dictionary,
        S: RootWordSource,
    {
        Self {
            score: session.score(),
            high_score: session.high_score(),
            words_completed: session.words_completed(),
            round_limit: session.round_limit(),
            accepted: session.used_words().len(),
        }
    }

    /// One-based position of the current root word, capped at the round limit.
    pub fn current_word(&self) -> usize {
        (self.words_completed + 1).min(self.round_limit)
    }
}

pub struct RoundStatsDisplay<'a> {
    stats: RoundStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> RoundStatsDisplay<'a> {
    pub fn new(stats: RoundStats) -> Self {
        Self { stats, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&RoundStats) -> String),
    LabelValue(&'static str, &'static dyn Fn(&RoundStats) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|stats| stats.score.to_string()),
    Row::FullLabel("HIGH SCORE:"),
    Row::FullValue(&|stats| stats.high_score.to_string()),
    Row::Empty,
    Row::LabelValue("WORD:", &|stats| {
        format!("{}/{}", stats.current_word(), stats.round_limit)
    }),
    Row::LabelValue("FOUND:", &|stats| stats.accepted.to_string()),
];

impl Widget for RoundStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(&self.stats), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(&self.stats), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
