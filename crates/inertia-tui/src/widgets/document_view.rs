use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct DocumentWidget;

impl DocumentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let border_style = if app.engine.is_attached() {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", app.document.title),
                Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg0));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // The page measures itself in rows of the inner area
        app.set_viewport_rows(inner_area.height);

        let top = app.top_row() as usize;
        let lines: Vec<Line> = app
            .document
            .lines
            .iter()
            .skip(top)
            .take(inner_area.height as usize)
            .map(|line| Line::from(Span::styled(line.as_str(), Style::default().fg(app.theme.fg0))))
            .collect();

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}
