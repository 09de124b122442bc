use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use inertia_core::momentum::Phase;
use inertia_core::ScrollHost;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let state = app.engine.state();

        let (phase_str, phase_color) = match (app.engine.is_attached(), app.phase()) {
            (false, _) => ("OFF", theme.grey1),
            (true, Phase::Idle) => ("IDLE", theme.info),
            (true, Phase::Scheduled) => ("GLIDE", theme.success),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {:>6.1} / {:<6.1} v={:>+6.2} {:>3.0}%",
                app.engine.host().scroll_offset(),
                app.engine.host().max_offset(),
                state.velocity,
                app.progress() * 100.0
            )
        };

        let help_hint = " q:quit j/k:notch g/G:top/bottom space:momentum ";
        let used = phase_str.len() + 2 + status_text.len() + help_hint.len();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", phase_str),
                Style::default().fg(theme.bg0).bg(phase_color),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
