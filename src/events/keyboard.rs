//! Keyboard event handling by screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.show_help {
        return handle_help_mode(key);
    }

    match app.screen() {
        Screen::Form => handle_form_mode(key),
        Screen::DrillDown(_) => handle_drill_down_mode(key),
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

fn handle_form_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Action::Open,
        _ => Action::None,
    }
}

fn handle_drill_down_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Choose,
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => Action::Back,
        // Row shortcuts
        KeyCode::Char(c @ '1'..='9') => Action::ChooseRow((c as usize) - ('1' as usize)),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_form_keys() {
        let app = App::new(&Config::default());
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::Open);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('j'))), Action::CursorDown);
        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::None);
    }

    #[test]
    fn test_drill_down_keys() {
        let mut app = App::new(&Config::default());
        app.dispatch(Action::Open);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::Choose);
        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::Back);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('3'))), Action::ChooseRow(2));
    }

    #[test]
    fn test_help_captures_keys() {
        let mut app = App::new(&Config::default());
        app.dispatch(Action::OpenHelp);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::None);
        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::CloseHelp);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
    }
}
