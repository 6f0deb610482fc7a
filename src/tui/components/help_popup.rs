//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::events::Action;
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

const FORM_KEYS: &[(&str, &str)] = &[
    ("j/k     ", "Move between pickers"),
    ("Enter/l ", "Open picker"),
    ("click   ", "Open picker"),
    ("?       ", "Toggle help"),
    ("q       ", "Quit"),
];

const LIST_KEYS: &[(&str, &str)] = &[
    ("j/k     ", "Move between rows"),
    ("Enter   ", "Choose row"),
    ("1-9     ", "Choose row by number"),
    ("Esc/h   ", "Back to form"),
];

fn key_lines<'a>(
    keys: &'a [(&'static str, &'static str)],
) -> impl Iterator<Item = Line<'static>> + 'a {
    keys.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("  {}", key), Style::new().fg(TEXT_WHITE)),
            Span::styled(*description, Style::new().fg(TEXT_DIM)),
        ])
    })
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, interactions: &mut InteractionRegistry) {
    // Calculate centered popup area
    let popup_width = 44u16;
    let popup_height = 17u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::styled("Keyboard Shortcuts", Style::new().fg(TEXT_WHITE).bold()),
        Line::raw(""),
        Line::styled("Form", Style::new().fg(ACCENT_BLUE).bold()),
    ];
    lines.extend(key_lines(FORM_KEYS));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Picker List", Style::new().fg(ACCENT_MINT).bold()));
    lines.extend(key_lines(LIST_KEYS));
    lines.push(Line::raw(""));

    // Footer
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_BLUE))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);

    // Any click dismisses; nothing underneath receives it
    interactions.register(
        InteractiveRegion::clickable("help_popup", area, Action::CloseHelp).with_priority(10),
    );
}
