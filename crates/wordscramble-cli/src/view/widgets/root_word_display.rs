use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

/// The current root word with the player's input underneath.
pub struct RootWordDisplay<'a> {
    root_word: &'a str,
    input: &'a str,
    show_cursor: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> RootWordDisplay<'a> {
    pub fn new(root_word: &'a str, input: &'a str) -> Self {
        Self {
            root_word,
            input,
            show_cursor: true,
            block: None,
        }
    }

    pub fn show_cursor(self, show_cursor: bool) -> Self {
        Self {
            show_cursor,
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        3 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for RootWordDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let [word_area, _, input_area] = area.layout(&Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]));

        let spaced = self
            .root_word
            .chars()
            .flat_map(char::to_uppercase)
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        Line::styled(spaced, style::ROOT_WORD)
            .centered()
            .render(word_area, buf);

        let mut spans = vec![
            Span::styled("> ", style::DIM),
            Span::styled(self.input, style::INPUT),
        ];
        if self.show_cursor {
            spans.push(Span::styled("_", style::DIM));
        }
        Line::from(spans).centered().render(input_area, buf);
    }
}
