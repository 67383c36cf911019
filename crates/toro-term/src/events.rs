//! Keyboard input from the controlling terminal.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use toro_core::EventSource;

/// Blocks on crossterm's event queue until a key is pressed.
///
/// Key releases and repeats, mouse, focus, paste and resize events are
/// skipped.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn wait_event(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
