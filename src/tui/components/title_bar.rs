//! Navigation title bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

const BACK: &str = "‹ ";

/// Render the title of the top screen, with a back button below the root.
pub fn render_title_bar(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    interactions: &mut InteractionRegistry,
) {
    let mut titles = app.nav.titles();
    let root = titles
        .next()
        .and_then(|lines| lines.first())
        .map(|line| line.to_string())
        .unwrap_or_default();

    if app.nav.is_root() {
        let line = Line::styled(root, Style::new().fg(TEXT_WHITE).bold()).centered();
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    // Back button: "‹ <previous title>"
    let back = Line::from(vec![
        Span::styled(BACK, Style::new().fg(ACCENT_BLUE).bold()),
        Span::styled(root, Style::new().fg(ACCENT_BLUE)),
    ]);
    let back_width = (back.width() as u16).min(area.width);
    let back_area = Rect::new(area.x, area.y, back_width, area.height.min(1));
    frame.render_widget(Paragraph::new(back), back_area);
    interactions.register_click("back", back_area, Action::Back);

    // Screen title, centered; composite titles show their first line
    if let Some(title) = app.nav.top().title.first() {
        let title = title.clone().patch_style(Style::new().bold()).centered();
        let title_area = Rect::new(
            area.x + back_width,
            area.y,
            area.width.saturating_sub(back_width * 2),
            area.height.min(1),
        );
        frame.render_widget(Paragraph::new(title), title_area);
    }
}
