use std::io;

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop for turn-based applications.
///
/// Nothing changes between player actions, so the loop blocks on terminal
/// input and requests a redraw after each event.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop` that renders once on startup.
    pub fn new() -> Self {
        Self { dirty: true }
    }

    /// Returns the next event, blocking until terminal input arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}
