use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize event
    Resize,
    /// No input within one tick
    Tick,
}

/// Polls crossterm for input
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event
    pub fn poll(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Event::Tick));
        }
        match event::read()? {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(Event::Key(key))),
            event::Event::Resize(_, _) => Ok(Some(Event::Resize)),
            _ => Ok(None),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(16)
    }
}
