use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

/// Accepted words, most recent first, each with the points it earned.
pub struct UsedWordsDisplay<'a> {
    words: &'a [String],
    block: Option<BlockWidget<'a>>,
}

impl<'a> UsedWordsDisplay<'a> {
    pub fn new(words: &'a [String]) -> Self {
        Self { words, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for UsedWordsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        if self.words.is_empty() {
            Line::styled("No words yet", style::DIM)
                .centered()
                .render(area, buf);
            return;
        }

        for (word, row) in self.words.iter().zip(area.rows()) {
            let points = word.chars().count();
            Line::from(vec![
                Span::styled(format!("{points:>2} "), style::DIM),
                Span::styled(word.as_str(), style::ACCEPTED),
            ])
            .render(row, buf);
        }
    }
}
