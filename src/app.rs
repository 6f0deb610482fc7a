use ratatui::style::Style;
use ratatui::text::{Line, Span};

use listpick::navigation::NavigationStack;
use listpick::picker::{
    Choice, ListPicker, Picker, PickerOptions, PickerStyle, SelectionBinding, StyledTitle,
};
use listpick::text::{Strings, Title};

use crate::choices::{self, Accent, Framework};
use crate::config::Config;
use crate::events::Action;
use crate::form::{FieldId, Form, Section};
use crate::log;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme;

/// Screens on the navigation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    DrillDown(FieldId),
}

pub struct App {
    pub form: Form,
    pub nav: NavigationStack<Screen>,
    pub strings: Strings,
    pub style: PickerStyle,
    pub pop_on_select: bool,
    pub show_help: bool,
    pub should_quit: bool,
    /// Last selection change, shown in the hotkey bar
    pub status: Option<String>,
    /// Rebuilt on every render
    pub interactions: InteractionRegistry,
    pub framework: SelectionBinding<Framework>,
    pub accent: SelectionBinding<Accent>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut strings = choices::default_strings();
        strings.merge(Strings::from(config.strings.clone()));

        let initial = config
            .initial_framework
            .as_deref()
            .and_then(Framework::from_id)
            .unwrap_or(Framework::Ratatui);
        let framework = SelectionBinding::new(initial);
        let accent = SelectionBinding::new(Accent::Green);

        framework.on_change(|f| log::log(&format!("framework -> {:?}", f)));
        accent.on_change(|a| log::log(&format!("accent -> {:?}", a)));

        Self {
            form: demo_form(&framework, &accent),
            nav: NavigationStack::new(Screen::Form, vec![Line::raw("Picker Demo")]),
            strings,
            style: theme::picker_style(config.indicator()),
            pop_on_select: config.pop_on_select(),
            show_help: false,
            should_quit: false,
            status: None,
            interactions: InteractionRegistry::new(),
            framework,
            accent,
        }
    }

    pub fn screen(&self) -> Screen {
        *self.nav.screen()
    }

    /// Apply an action to the app state.
    pub fn dispatch(&mut self, action: Action) {
        if action != Action::None {
            log::log_event(&format!("{:?}", action));
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::OpenHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::CursorDown => match self.screen() {
                Screen::Form => self.form.select_next(),
                Screen::DrillDown(field) => {
                    if let Some(picker) = self.form.picker_mut(field) {
                        picker.cursor_down();
                    }
                }
            },
            Action::CursorUp => match self.screen() {
                Screen::Form => self.form.select_prev(),
                Screen::DrillDown(field) => {
                    if let Some(picker) = self.form.picker_mut(field) {
                        picker.cursor_up();
                    }
                }
            },
            Action::Open => {
                if let Some(field) = self.form.focused().copied() {
                    self.open(field);
                }
            }
            Action::OpenRow(row) => {
                if let Some(field) = self.form.items().get(row).copied() {
                    self.form.select_index(row);
                    self.open(field);
                }
            }
            Action::Choose => self.choose(None),
            Action::ChooseRow(index) => self.choose(Some(index)),
            Action::Back => {
                if let Some(screen) = self.nav.pop() {
                    log::log(&format!("pop {:?}", screen));
                }
            }
            Action::None => {}
        }
    }

    fn open(&mut self, field: FieldId) {
        if self.screen() != Screen::Form {
            return;
        }
        let Some(picker) = self.form.picker_mut(field) else {
            return;
        };
        let title = picker.disclose(&self.strings);
        log::log(&format!("push {:?}", field));
        self.nav.push(Screen::DrillDown(field), title);
    }

    /// Choose a row on the drill-down screen (`None` = the cursor row).
    fn choose(&mut self, index: Option<usize>) {
        let Screen::DrillDown(field) = self.screen() else {
            return;
        };
        let Some(picker) = self.form.picker_mut(field) else {
            return;
        };

        let choice = match index {
            Some(index) => picker.choose(index),
            None => picker.choose_focused(),
        };
        match choice {
            Choice::OutOfRange => return,
            Choice::Changed => {
                self.status = Some(format!("Selected {}", picker.value(&self.strings)));
            }
            Choice::Unchanged => {}
        }

        if self.pop_on_select {
            self.nav.pop();
        }
    }
}

/// The demo form: every way of decorating a picker.
fn demo_form(framework: &SelectionBinding<Framework>, accent: &SelectionBinding<Accent>) -> Form {
    let frameworks = Framework::ALL.to_vec();

    let starred = Line::from(vec![
        Span::styled("★ ", Style::new().fg(theme::ACCENT_GOLD)),
        Span::raw("Favorite Framework"),
    ]);
    let two_line = vec![
        Line::raw("Favorite Framework"),
        Line::styled(
            "Choose the favorite framework",
            Style::new().fg(theme::TEXT_DIM).italic(),
        ),
    ];

    let pickers = Section::new(Some("ListPicker"), Some("And more customizable features..."))
        .with(ListPicker::titled(
            Title::key("picker.favorite"),
            framework.clone(),
            frameworks.clone(),
        ))
        .with(ListPicker::new(
            framework.clone(),
            frameworks.clone(),
            PickerOptions::titled("Favorite Framework").header("Header"),
        ))
        .with(ListPicker::new(
            framework.clone(),
            frameworks.clone(),
            PickerOptions::new()
                .navigation_title(StyledTitle::new(
                    "NavTitle1",
                    Style::new().fg(theme::ACCENT_MINT).bold(),
                ))
                .footer("Footer")
                .label(starred),
        ))
        .with(ListPicker::new(
            framework.clone(),
            frameworks,
            PickerOptions::new()
                .navigation_title("NavTitle2")
                .header("Header")
                .footer("Footer")
                .label(two_line),
        ));

    let localized = Section::new(
        Some("Localized"),
        Some("Titles resolve through the [strings] table"),
    )
    .with(ListPicker::titled(
        Title::key("picker.accent"),
        accent.clone(),
        Accent::ALL.to_vec(),
    ))
    .with(ListPicker::plain(accent.clone(), Accent::ALL.to_vec()));

    Form::new(vec![pickers, localized])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(pop_on_select: bool) -> App {
        let config = Config {
            pop_on_select: Some(pop_on_select),
            ..Config::default()
        };
        App::new(&config)
    }

    #[test]
    fn test_open_pushes_drill_down() {
        let mut app = app(true);
        app.dispatch(Action::Open);
        assert_eq!(app.screen(), Screen::DrillDown((0, 0)));
        assert_eq!(app.nav.top().title, vec![Line::raw("Favorite Framework")]);
    }

    #[test]
    fn test_choose_writes_and_pops() {
        let mut app = app(true);
        app.dispatch(Action::Open);
        app.dispatch(Action::CursorDown);
        app.dispatch(Action::Choose);

        assert_eq!(app.framework.get(), Framework::Cursive);
        assert_eq!(app.screen(), Screen::Form);
        assert_eq!(app.status.as_deref(), Some("Selected Cursive"));
    }

    #[test]
    fn test_choose_same_row_is_noop() {
        let mut app = app(false);
        app.dispatch(Action::OpenRow(1));
        app.dispatch(Action::ChooseRow(0));

        assert_eq!(app.framework.version(), 0);
        assert!(app.status.is_none());
        assert_eq!(app.screen(), Screen::DrillDown((0, 1)));
    }

    #[test]
    fn test_out_of_range_row_stays() {
        let mut app = app(true);
        app.dispatch(Action::Open);
        app.dispatch(Action::ChooseRow(42));
        assert_eq!(app.screen(), Screen::DrillDown((0, 0)));
    }

    #[test]
    fn test_plain_picker_has_empty_title() {
        let mut app = app(true);
        let row = app.form.row_of((1, 1)).unwrap();
        app.dispatch(Action::OpenRow(row));
        assert!(app.nav.top().title.is_empty());
    }

    #[test]
    fn test_shared_binding_updates_every_summary() {
        let mut app = app(true);
        app.dispatch(Action::OpenRow(3));
        app.dispatch(Action::ChooseRow(2));

        for index in 0..4 {
            let picker = app.form.picker((0, index)).unwrap();
            assert_eq!(picker.value(&app.strings), "egui");
        }
    }

    #[test]
    fn test_config_strings_override_defaults() {
        let mut config = Config::default();
        config
            .strings
            .insert("accent.green".to_string(), "Vert".to_string());
        let app = App::new(&config);
        let picker = app.form.picker((1, 0)).unwrap();
        assert_eq!(picker.value(&app.strings), "Vert");
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut app = app(true);
        app.dispatch(Action::Back);
        assert_eq!(app.screen(), Screen::Form);
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
