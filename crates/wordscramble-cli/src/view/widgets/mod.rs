use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Block as BlockWidget,
};

pub use self::{
    key_binding_display::*, leaderboard_display::*, popup_display::*, root_word_display::*,
    round_stats_display::*, used_words_display::*,
};

mod key_binding_display;
mod leaderboard_display;
mod popup_display;
mod root_word_display;
mod round_stats_display;
mod used_words_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const DIM: Style = fg_bg(color::GRAY, color::BLACK);
    pub const ROOT_WORD: Style = fg_bg(color::YELLOW, color::BLACK).add_modifier(Modifier::BOLD);
    pub const INPUT: Style = fg_bg(color::CYAN, color::BLACK);
    pub const ACCEPTED: Style = fg_bg(color::GREEN, color::BLACK);
    pub const ALERT: Style = fg_bg(color::RED, color::BLACK);
    pub const HIGHLIGHT: Style = fg_bg(color::BLACK, color::YELLOW);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}

/// Centered rectangle of the given size, clamped to `area`.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    area
}
