use std::sync::Arc;
use std::time::{Duration, Instant};

use inertia_core::momentum::{IntervalFrames, MomentumEngine, Phase, WheelEvent, WheelOutcome};
use inertia_core::{AppConfig, ScrollHost};
use tracing::debug;

use crate::document::Document;
use crate::input::{Action, PAGE_NOTCHES};
use crate::scroll::{TerminalPage, UiConfigExt};
use crate::theme::Theme;

/// Engine type driving the viewer
pub type ViewerEngine = MomentumEngine<TerminalPage, IntervalFrames>;

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Document being viewed
    pub document: Document,
    /// Momentum scrolling engine (owns the page and the frame timer)
    pub engine: ViewerEngine,
    /// Color theme
    pub theme: Theme,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, document: Document, theme: Theme) -> Self {
        let page = TerminalPage::new(document.len(), 0, config.ui.row_height);
        let frames = IntervalFrames::new(config.ui.frame_interval());
        let mut engine = MomentumEngine::new(config.scroll, page, frames);
        engine.start();
        Self {
            config,
            document,
            engine,
            theme,
            should_quit: false,
            status_message: None,
        }
    }

    /// Feed one wheel delta to the engine; falls back to a discrete jump
    /// when momentum scrolling is switched off
    pub fn on_wheel(&mut self, delta: f64, now: Instant) -> WheelOutcome {
        self.engine.frames_mut().observe(now);
        let mut event = WheelEvent::new(delta);
        let outcome = self.engine.handle_wheel(&mut event);
        if !event.default_prevented() {
            self.engine.host_mut().native_scroll(delta);
        }
        outcome
    }

    /// Deliver the pending frame if its deadline has passed
    pub fn deliver_due_frame(&mut self, now: Instant) -> bool {
        match self.engine.frames_mut().take_due(now) {
            Some(id) => {
                self.engine.on_frame(id);
                true
            }
            None => false,
        }
    }

    /// Time until the next animation frame, if one is pending
    pub fn frame_timeout(&self, now: Instant) -> Option<Duration> {
        self.engine.frames().timeout(now)
    }

    /// Apply a key action
    pub fn apply(&mut self, action: Action, now: Instant) {
        let notches = match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::NotchDown => 1,
            Action::NotchUp => -1,
            Action::PageDown => PAGE_NOTCHES,
            Action::PageUp => -PAGE_NOTCHES,
            Action::JumpToTop => {
                self.engine.set_scroll(0.0);
                return;
            }
            Action::JumpToBottom => {
                self.engine.set_scroll(f64::MAX);
                return;
            }
            Action::ToggleMomentum => {
                self.toggle_momentum();
                return;
            }
            Action::None => return,
        };
        let delta = self.config.ui.notch_delta(notches.signum());
        for _ in 0..notches.unsigned_abs() {
            self.on_wheel(delta, now);
        }
    }

    /// Start or stop the engine
    pub fn toggle_momentum(&mut self) {
        if self.engine.is_attached() {
            self.engine.stop();
            self.status_message = Some("Momentum off".to_string());
        } else {
            self.engine.start();
            self.status_message = Some("Momentum on".to_string());
        }
    }

    /// Update the viewport size from the rendered area
    pub fn set_viewport_rows(&mut self, rows: u16) {
        if self.engine.host().viewport_rows() != rows {
            debug!(rows, "Viewport resized");
            self.engine.host_mut().set_viewport_rows(rows);
        }
    }

    /// First visible line
    pub fn top_row(&self) -> u16 {
        self.engine.host().top_row()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    /// Scroll progress in [0, 1]
    pub fn progress(&self) -> f64 {
        let page = self.engine.host();
        let max = page.max_offset();
        if max > 0.0 {
            page.scroll_offset() / max
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (App, Instant) {
        let mut app = App::new(
            Arc::new(AppConfig::default()),
            Document::sample(),
            Theme::default(),
        );
        app.set_viewport_rows(20);
        (app, Instant::now())
    }

    #[test]
    fn test_wheel_glides_over_frames() {
        let (mut app, start) = app();
        assert_eq!(app.on_wheel(100.0, start), WheelOutcome::Started);
        assert_eq!(app.frame_timeout(start), Some(Duration::from_millis(16)));

        assert!(!app.deliver_due_frame(start + Duration::from_millis(5)));
        let mut now = start;
        let mut frames = 0;
        while app.phase() == Phase::Scheduled {
            now += Duration::from_millis(16);
            assert!(app.deliver_due_frame(now));
            frames += 1;
        }
        assert_eq!(frames, 53);
        // One notch glides just under 100 units, a little over six rows
        assert_eq!(app.top_row(), 6);
        assert_eq!(app.frame_timeout(now), None);
    }

    #[test]
    fn test_native_scroll_when_momentum_off() {
        let (mut app, start) = app();
        app.apply(Action::ToggleMomentum, start);
        assert!(!app.engine.is_attached());
        assert_eq!(app.on_wheel(100.0, start), WheelOutcome::Ignored);
        assert_eq!(app.engine.host().scroll_offset(), 100.0);
        assert_eq!(app.frame_timeout(start), None);

        app.apply(Action::ToggleMomentum, start);
        assert!(app.engine.is_attached());
    }

    #[test]
    fn test_jump_cancels_glide() {
        let (mut app, start) = app();
        app.apply(Action::PageDown, start);
        assert_eq!(app.phase(), Phase::Scheduled);
        app.apply(Action::JumpToBottom, start);
        assert_eq!(app.phase(), Phase::Idle);
        assert_eq!(app.progress(), 1.0);
        assert_eq!(app.top_row(), 380);
        app.apply(Action::JumpToTop, start);
        assert_eq!(app.top_row(), 0);
    }

    #[test]
    fn test_page_down_adds_several_impulses() {
        let (mut app, start) = app();
        app.apply(Action::PageDown, start);
        assert_eq!(app.engine.state().velocity, 8.0 * PAGE_NOTCHES as f64);
        assert_eq!(app.engine.frames().timeout(start), Some(Duration::from_millis(16)));
    }

    #[test]
    fn test_notch_keys_follow_wheel_delta() {
        let mut config = AppConfig::default();
        config.ui.wheel_delta = 5.0;
        let mut app = App::new(Arc::new(config), Document::sample(), Theme::default());
        app.set_viewport_rows(20);
        let start = Instant::now();

        app.apply(Action::NotchUp, start);
        assert_eq!(app.engine.state().velocity, -3.0);
        app.apply(Action::PageDown, start);
        assert_eq!(app.engine.state().velocity, -3.0 + 3.0 * PAGE_NOTCHES as f64);
    }

    #[test]
    fn test_quit() {
        let (mut app, start) = app();
        app.apply(Action::Quit, start);
        assert!(app.should_quit);
    }
}
