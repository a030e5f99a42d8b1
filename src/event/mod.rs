use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent};

use crate::error::EventError;

/// All events that can occur in the application.
/// Sourced from keyboard input and the render-loop timer.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event
    Key(KeyEvent),

    /// Timer tick carrying the current wall-clock time (header clock)
    Tick(DateTime<Local>),
}

/// Poll the terminal for the next key event, waiting at most `timeout`.
/// Returns `Ok(None)` when the timeout elapses without input; non-key
/// terminal events (focus, paste, resize) are ignored.
pub fn poll_key(timeout: Duration) -> Result<Option<KeyEvent>, EventError> {
    if !event::poll(timeout).map_err(EventError::Poll)? {
        return Ok(None);
    }
    match event::read().map_err(EventError::Read)? {
        Event::Key(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}
