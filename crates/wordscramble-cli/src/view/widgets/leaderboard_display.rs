use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use wordscramble_engine::Leaderboard;

use crate::view::widgets::style;

/// Ranked leaderboard table.
pub struct LeaderboardDisplay<'a> {
    leaderboard: &'a Leaderboard,
    highlight: Option<usize>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> LeaderboardDisplay<'a> {
    pub fn new(leaderboard: &'a Leaderboard) -> Self {
        Self {
            leaderboard,
            highlight: None,
            block: None,
        }
    }

    /// Emphasizes the entry at `rank`.
    pub fn highlight(self, rank: Option<usize>) -> Self {
        Self {
            highlight: rank,
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        32 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let rows = u16::try_from(self.leaderboard.len()).unwrap_or(u16::MAX);
        rows.saturating_add(1)
            .saturating_add(super::block_vertical_margin(self.block.as_ref()))
    }
}

impl Widget for LeaderboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let columns = Layout::horizontal([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(6),
        ]);

        let mut rows = area.rows();
        if let Some(header) = rows.next() {
            let [rank_area, name_area, score_area] = header.layout(&columns);
            Line::styled("RANK", style::DIM).render(rank_area, buf);
            Line::styled("NAME", style::DIM).render(name_area, buf);
            Line::styled("SCORE", style::DIM)
                .right_aligned()
                .render(score_area, buf);
        }

        for ((rank, entry), row) in self.leaderboard.iter().enumerate().zip(rows) {
            let style = if self.highlight == Some(rank) {
                style::HIGHLIGHT
            } else {
                style::DEFAULT
            };
            let [rank_area, name_area, score_area] = row.layout(&columns);
            Line::styled(format!("{:>3}.", rank + 1), style).render(rank_area, buf);
            Line::styled(entry.name.as_str(), style).render(name_area, buf);
            Line::styled(entry.score.to_string(), style)
                .right_aligned()
                .render(score_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn test_renders_ranked_entries() {
        let mut leaderboard = Leaderboard::default();
        leaderboard.insert("ada", 30);

        let mut terminal = Terminal::new(TestBackend::new(32, 3)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(
                    LeaderboardDisplay::new(&leaderboard).highlight(Some(0)),
                    frame.area(),
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let line = |y: u16| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        };
        assert!(line(0).starts_with("RANK NAME"));
        assert!(line(1).starts_with("  1. ada"));
        assert!(line(1).trim_end().ends_with("30"));
        assert!(line(2).starts_with("  2. ledoux"));
        assert_eq!(buffer[(0, 1)].bg, style::HIGHLIGHT.bg.unwrap());
    }
}
