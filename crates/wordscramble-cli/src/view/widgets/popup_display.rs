use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Clear, Paragraph, Widget, Wrap},
};

use crate::view::widgets::style;

/// Modal message shown after a rejected action.
pub struct AlertDisplay<'a> {
    title: &'a str,
    message: &'a str,
    block: Option<BlockWidget<'a>>,
}

impl<'a> AlertDisplay<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let text = self.title.chars().count().max(self.message.chars().count());
        u16::try_from(text)
            .unwrap_or(u16::MAX)
            .clamp(20, 60)
            .saturating_add(2 + super::block_horizontal_margin(self.block.as_ref()))
    }

    pub fn height(&self) -> u16 {
        4 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for AlertDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let [title_area, message_area] =
            area.layout(&Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]));
        Line::styled(self.title, style::ALERT)
            .centered()
            .render(title_area, buf);
        Paragraph::new(self.message)
            .style(style::DEFAULT)
            .centered()
            .wrap(Wrap { trim: true })
            .render(message_area, buf);
    }
}

/// Prompt asking for the name to record a finished round under.
pub struct NamePromptDisplay<'a> {
    score: usize,
    name: &'a str,
    error: Option<&'a str>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> NamePromptDisplay<'a> {
    pub fn new(score: usize, name: &'a str) -> Self {
        Self {
            score,
            name,
            error: None,
            block: None,
        }
    }

    pub fn error(self, error: Option<&'a str>) -> Self {
        Self { error, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        40 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        5 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for NamePromptDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let [score_area, _, name_area, _, error_area] = area.layout(&Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]));

        Line::styled(format!("Final score: {}", self.score), style::DEFAULT)
            .centered()
            .render(score_area, buf);
        Line::from(vec![
            Span::styled("Name: ", style::DIM),
            Span::styled(self.name, style::INPUT),
            Span::styled("_", style::DIM),
        ])
        .centered()
        .render(name_area, buf);
        if let Some(error) = self.error {
            Line::styled(error, style::ALERT)
                .centered()
                .render(error_area, buf);
        }
    }
}
