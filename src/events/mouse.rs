//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            let action = app.interactions.handle_scroll_up(x, y);
            if matches!(action, Action::None) {
                // Default scroll behavior if no component handles it
                Action::CursorUp
            } else {
                action
            }
        }
        MouseEventKind::ScrollDown => {
            let action = app.interactions.handle_scroll_down(x, y);
            if matches!(action, Action::None) {
                Action::CursorDown
            } else {
                action
            }
        }
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use crate::config::Config;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_uses_registry() {
        let mut app = App::new(&Config::default());
        app.interactions
            .register_click("form_row", Rect::new(0, 2, 40, 1), Action::OpenRow(0));

        let click = mouse(MouseEventKind::Down(MouseButton::Left), 5, 2);
        assert_eq!(handle_mouse_event(&app, click), Action::OpenRow(0));

        let miss = mouse(MouseEventKind::Down(MouseButton::Left), 5, 3);
        assert_eq!(handle_mouse_event(&app, miss), Action::None);
    }

    #[test]
    fn test_scroll_defaults_to_cursor() {
        let app = App::new(&Config::default());
        let up = mouse(MouseEventKind::ScrollUp, 0, 0);
        assert_eq!(handle_mouse_event(&app, up), Action::CursorUp);
    }
}
