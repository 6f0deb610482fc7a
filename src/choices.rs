//! Candidate types shown in the demo form.

use listpick::picker::Candidate;
use listpick::text::{Strings, Title};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Ratatui,
    Cursive,
    Egui,
    Iced,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::Ratatui,
        Framework::Cursive,
        Framework::Egui,
        Framework::Iced,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

impl Candidate for Framework {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        match self {
            Framework::Ratatui => "ratatui",
            Framework::Cursive => "cursive",
            Framework::Egui => "egui",
            Framework::Iced => "iced",
        }
    }

    fn title(&self) -> Title {
        match self {
            Framework::Ratatui => "Ratatui".into(),
            Framework::Cursive => "Cursive".into(),
            Framework::Egui => "egui".into(),
            Framework::Iced => "Iced".into(),
        }
    }
}

/// Accent colors use localizable titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Red,
    Green,
    Blue,
}

impl Accent {
    pub const ALL: [Accent; 3] = [Accent::Red, Accent::Green, Accent::Blue];
}

impl Candidate for Accent {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        match self {
            Accent::Red => "red",
            Accent::Green => "green",
            Accent::Blue => "blue",
        }
    }

    fn title(&self) -> Title {
        Title::key(format!("accent.{}", self.id()))
    }
}

/// Built-in English strings; `[strings]` in the config file overrides these.
pub fn default_strings() -> Strings {
    Strings::new()
        .with("picker.favorite", "Favorite Framework")
        .with("picker.accent", "Accent Color")
        .with("accent.red", "Red")
        .with("accent.green", "Green")
        .with("accent.blue", "Blue")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_ids_round_trip() {
        for framework in Framework::ALL {
            assert_eq!(Framework::from_id(framework.id()), Some(framework));
        }
        assert_eq!(Framework::from_id("gtk"), None);
    }

    #[test]
    fn test_accent_titles_are_keys() {
        let strings = default_strings();
        assert_eq!(Accent::Blue.title(), Title::key("accent.blue"));
        assert_eq!(Accent::Blue.title().resolve(&strings), "Blue");
    }
}
