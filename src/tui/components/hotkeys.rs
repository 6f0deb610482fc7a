//! Hotkey bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Screen};
use crate::tui::theme::*;

/// Render the hotkey hints for the current screen plus the last status.
pub fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys = match app.screen() {
        Screen::Form => Line::from(vec![
            Span::styled("[j/k]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" move • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" open • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" help • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled("uit", Style::new().fg(TEXT_DIM)),
        ]),
        Screen::DrillDown(_) => Line::from(vec![
            Span::styled("[j/k]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" move • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" choose • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" back", Style::new().fg(TEXT_DIM)),
        ]),
    };

    frame.render_widget(Paragraph::new(hotkeys), area);

    if let Some(status) = &app.status {
        let status = Line::styled(status.as_str(), Style::new().fg(ACCENT_MINT)).right_aligned();
        frame.render_widget(Paragraph::new(status), area);
    }
}
