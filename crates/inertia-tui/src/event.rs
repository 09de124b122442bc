use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    wheel_delta: f64,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, wheel_delta: f64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            wheel_delta,
        }
    }

    /// Poll for the next event
    ///
    /// Waits at most `deadline` (the time left until the next animation
    /// frame) or the idle tick rate when no frame is pending.
    pub fn next(&self, deadline: Option<Duration>) -> Result<Option<AppEvent>> {
        let timeout = deadline.map_or(self.tick_rate, |d| d.min(self.tick_rate));
        if event::poll(timeout)? {
            Ok(self.translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }

    fn translate(&self, event: Event) -> Option<AppEvent> {
        match event {
            // Only handle key press events, ignore release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(AppEvent::Wheel(self.wheel_delta)),
                MouseEventKind::ScrollUp => Some(AppEvent::Wheel(-self.wheel_delta)),
                _ => None,
            },
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse wheel notch, positive = down
    Wheel(f64),
    /// Terminal was resized
    Resize(u16, u16),
    /// Poll timed out: a frame may be due
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_wheel_translation() {
        let handler = EventHandler::new(250, 100.0);
        assert_eq!(
            handler.translate(mouse(MouseEventKind::ScrollDown)),
            Some(AppEvent::Wheel(100.0))
        );
        assert_eq!(
            handler.translate(mouse(MouseEventKind::ScrollUp)),
            Some(AppEvent::Wheel(-100.0))
        );
        assert_eq!(handler.translate(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = EventHandler::new(250, 100.0);
        let mut key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            handler.translate(Event::Key(key)),
            Some(AppEvent::Key(_))
        ));
        key.kind = KeyEventKind::Release;
        assert_eq!(handler.translate(Event::Key(key)), None);
    }
}
