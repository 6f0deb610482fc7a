//! Drill-down screen: one picker's candidate list.

use ratatui::{Frame, layout::Rect};

use crate::app::App;
use crate::events::Action;
use crate::form::FieldId;
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion};

/// Render the candidate list of the picker at `field`.
pub fn render_drill_down(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    field: FieldId,
    interactions: &mut InteractionRegistry,
) {
    let Some(picker) = app.form.picker(field) else {
        return;
    };

    let layout = picker.drill_down_layout(area, &app.strings, &app.style);
    picker.render_drill_down(area, frame.buffer_mut(), &app.strings, &app.style);

    interactions.register_scroll("drill_down", area, Action::CursorUp, Action::CursorDown);
    for (index, row_area) in layout.rows {
        interactions.register(
            InteractiveRegion::clickable("drill_down_row", row_area, Action::ChooseRow(index))
                .with_priority(1),
        );
    }
}
