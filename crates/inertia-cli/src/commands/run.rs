use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::debug;

use inertia_core::AppConfig;
use inertia_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{DocumentWidget, StatusBarWidget},
    Document, Theme,
};

/// Poll timeout while no frame is pending
const IDLE_TICK_MS: u64 = 250;

pub async fn run(config: AppConfig, file: Option<&Path>) -> Result<()> {
    let document = match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let title = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Document::from_text(title, &text)
        }
        None => Document::sample(),
    };
    debug!(lines = document.len(), title = %document.title, "Loaded document");

    let config = Arc::new(config);
    let event_handler = EventHandler::new(IDLE_TICK_MS, config.ui.wheel_delta);
    let mut app = App::new(config, document, Theme::default());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Inertia"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        // Advance the glide if its frame is due
        app.deliver_due_frame(Instant::now());

        // Draw UI
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            DocumentWidget::render(frame, layout[0], app);
            StatusBarWidget::render(frame, layout[1], app);
        })?;

        // Sleep until the next frame while gliding, otherwise at the idle rate
        let timeout = app.frame_timeout(Instant::now());
        if let Some(event) = event_handler.next(timeout)? {
            match event {
                AppEvent::Key(key) => {
                    app.status_message = None;
                    let action = handle_key_event(key);
                    app.apply(action, Instant::now());
                }
                AppEvent::Wheel(delta) => {
                    app.on_wheel(delta, Instant::now());
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
