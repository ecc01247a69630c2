use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::style;

/// Keys joined by `/`, then what they do.
type KeyBinding = (&'static [&'static str], &'static str);

/// Which keys the help bar lists.
///
/// Follows whatever currently receives key input: the round itself, the name
/// prompt, or a dismissable overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHelp {
    Round,
    NamePrompt,
    Dismiss,
}

impl KeyHelp {
    fn bindings(self) -> &'static [KeyBinding] {
        match self {
            Self::Round => &[
                (&["Enter"], "Submit"),
                (&["Tab"], "Next word"),
                (&["Ctrl-R"], "Restart"),
                (&["Ctrl-L"], "Leaderboard"),
                (&["Esc"], "Quit"),
            ],
            Self::NamePrompt => &[
                (&["Enter"], "Record score"),
                (&["Ctrl-R"], "Discard round"),
                (&["Ctrl-C"], "Quit"),
            ],
            Self::Dismiss => &[(&["Enter", "Esc"], "Close"), (&["Ctrl-C"], "Quit")],
        }
    }
}

/// One-line help bar for a [`KeyHelp`].
///
/// Descriptions are dropped when the full bar does not fit, leaving only the keys.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    help: KeyHelp,
    block: Option<BlockWidget<'a>>,
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(help: KeyHelp) -> Self {
        Self { help, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn line(&self, with_descriptions: bool) -> Line<'static> {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.help.bindings().iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", style::DIM));
            }
            for (j, key) in keys.iter().copied().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", style::DIM));
                }
                spans.push(Span::styled(key, style::INPUT));
            }
            if with_descriptions {
                spans.push(Span::styled(" ", style::DEFAULT));
                spans.push(Span::styled(desc, style::DEFAULT));
            }
        }
        Line::from(spans).centered()
    }
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let full = self.line(true);
        let line = if full.width() <= usize::from(area.width) {
            full
        } else {
            self.line(false)
        };
        line.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(help: KeyHelp, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(KeyBindingDisplay::new(help), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect::<String>()
            .trim()
            .to_owned()
    }

    #[test]
    fn test_lists_bindings_for_context() {
        assert_eq!(
            render(KeyHelp::Dismiss, 40),
            "Enter/Esc Close | Ctrl-C Quit"
        );
        assert!(render(KeyHelp::NamePrompt, 80).starts_with("Enter Record score"));
        assert!(render(KeyHelp::Round, 80).contains("Tab Next word"));
    }

    #[test]
    fn test_narrow_area_shows_keys_only() {
        assert_eq!(
            render(KeyHelp::Round, 40),
            "Enter | Tab | Ctrl-R | Ctrl-L | Esc"
        );
    }

    #[test]
    fn test_keys_use_input_style() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(KeyBindingDisplay::new(KeyHelp::Dismiss), frame.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let x = (0..40)
            .find(|&x| buffer[(x, 0)].symbol() == "E")
            .unwrap();
        assert_eq!(buffer[(x, 0)].fg, style::INPUT.fg.unwrap());
    }
}
