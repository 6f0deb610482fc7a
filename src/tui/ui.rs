use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::{App, Screen};
use super::components::{
    render_drill_down, render_form, render_help_popup, render_horizontal_separator,
    render_hotkeys, render_title_bar,
};
use super::interaction::InteractionRegistry;

/// Draw the whole screen and return the interactive regions for this frame.
pub fn render(frame: &mut Frame, app: &App) -> InteractionRegistry {
    let mut interactions = InteractionRegistry::new();
    let area = frame.area();

    // Main vertical layout: title, separator, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(1), // Separator
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_title_bar(frame, main_layout[0], app, &mut interactions);
    render_horizontal_separator(frame, main_layout[1]);

    match app.screen() {
        Screen::Form => render_form(frame, main_layout[2], app, &mut interactions),
        Screen::DrillDown(field) => {
            render_drill_down(frame, main_layout[2], app, field, &mut interactions)
        }
    }

    render_hotkeys(frame, main_layout[3], app);

    if app.show_help {
        render_help_popup(frame, area, &mut interactions);
    }

    interactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use crate::config::Config;
    use crate::events::Action;
    use listpick::picker::Picker;

    fn draw(app: &mut App) -> Buffer {
        draw_sized(app, 48, 24)
    }

    fn draw_sized(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| app.interactions = render(frame, app))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn app() -> App {
        let config = Config {
            pop_on_select: Some(true),
            ..Config::default()
        };
        App::new(&config)
    }

    #[test]
    fn test_form_screen() {
        let mut app = app();
        let buf = draw(&mut app);

        assert_eq!(row(&buf, 0).trim(), "Picker Demo");
        assert_eq!(row(&buf, 2), "  LISTPICKER");
        assert!(row(&buf, 3).starts_with("> Favorite Framework"));
        assert!(row(&buf, 3).ends_with("Ratatui ›"));
    }

    #[test]
    fn test_drill_down_screen_and_click() {
        let mut app = app();
        app.dispatch(Action::Open);
        let buf = draw(&mut app);

        assert!(row(&buf, 0).starts_with("‹ Picker Demo"));
        assert!(row(&buf, 0).contains("Favorite Framework"));
        assert!(row(&buf, 2).starts_with("> Ratatui"));
        assert!(row(&buf, 2).ends_with("✓"));
        assert_eq!(row(&buf, 3), "  Cursive");

        // Click "Iced" (fourth row)
        let action = app.interactions.handle_click(4, 5);
        assert_eq!(action, Action::ChooseRow(3));
        app.dispatch(action);
        assert_eq!(app.screen(), Screen::Form);
    }

    #[test]
    fn test_help_popup_captures_clicks() {
        let mut app = app();
        app.dispatch(Action::OpenHelp);
        draw(&mut app);
        assert_eq!(app.interactions.handle_click(2, 3), Action::CloseHelp);
    }

    #[test]
    fn test_form_scrolls_to_focused_picker() {
        let mut app = app();
        app.form.select_index(4);
        let buf = draw_sized(&mut app, 48, 10);

        let focused: Vec<u16> = (0..buf.area.height)
            .filter(|&y| row(&buf, y).starts_with("> "))
            .collect();
        assert_eq!(focused.len(), 1);
        let y = focused[0];
        assert!(row(&buf, y).starts_with("> Accent Color"));
        assert_eq!(app.interactions.handle_click(4, y), Action::OpenRow(4));
    }
}
