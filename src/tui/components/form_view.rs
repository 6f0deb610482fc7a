//! Form screen: sections of picker summary rows.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
};

use listpick::picker::Picker;

use crate::app::App;
use crate::events::Action;
use crate::form::FieldId;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

use super::wrap_text;

/// Left indent for section header/footer text
const INDENT: u16 = 2;

/// One laid-out piece of the form, in unscrolled coordinates.
enum Block {
    Header(&'static str),
    Picker(FieldId),
    Footer(String),
}

/// Lay out every section top to bottom as `(y, height, block)`.
fn layout(app: &App, width: u16) -> Vec<(u16, u16, Block)> {
    let mut blocks = Vec::new();
    let mut y = 0u16;

    for (s, section) in app.form.sections().iter().enumerate() {
        if let Some(header) = section.header {
            blocks.push((y, 1, Block::Header(header)));
            y = y.saturating_add(1);
        }

        for (p, picker) in section.pickers.iter().enumerate() {
            let height = picker.summary_height(&app.strings, &app.style);
            blocks.push((y, height, Block::Picker((s, p))));
            y = y.saturating_add(height);
        }

        if let Some(footer) = section.footer {
            for text in wrap_text(footer, width.saturating_sub(INDENT) as usize) {
                blocks.push((y, 1, Block::Footer(text)));
                y = y.saturating_add(1);
            }
        }

        // Gap between sections
        y = y.saturating_add(1);
    }

    blocks
}

/// Render every section, scrolled so the focused picker stays visible.
pub fn render_form(frame: &mut Frame, area: Rect, app: &App, interactions: &mut InteractionRegistry) {
    let focused = app.form.focused().copied();
    let blocks = layout(app, area.width);

    let offset = blocks
        .iter()
        .find(|(_, _, block)| matches!(block, Block::Picker(field) if Some(*field) == focused))
        .map(|(y, height, _)| (y + height).saturating_sub(area.height))
        .unwrap_or(0);

    for (top, height, block) in blocks {
        if top < offset {
            continue;
        }
        let y = area.y + (top - offset);
        if y >= area.bottom() {
            break;
        }
        let height = height.min(area.bottom() - y);

        match block {
            Block::Header(header) => {
                let line = Line::styled(
                    header.to_uppercase(),
                    Style::new().fg(ACCENT_BLUE).bold(),
                );
                frame
                    .buffer_mut()
                    .set_line(area.x + INDENT, y, &line, area.width.saturating_sub(INDENT));
            }
            Block::Picker(field) => {
                let Some(picker) = app.form.picker(field) else {
                    continue;
                };
                let row_area = Rect::new(area.x, y, area.width, height);
                picker.render_summary(
                    row_area,
                    frame.buffer_mut(),
                    &app.strings,
                    &app.style,
                    focused == Some(field),
                );
                if let Some(row) = app.form.row_of(field) {
                    interactions.register_click("form_row", row_area, Action::OpenRow(row));
                }
            }
            Block::Footer(text) => {
                let line = Line::styled(text, Style::new().fg(TEXT_DIM).italic());
                frame
                    .buffer_mut()
                    .set_line(area.x + INDENT, y, &line, area.width.saturating_sub(INDENT));
            }
        }
    }
}
