//! Decoration slot content.
//!
//! Every slot (label, navigation title, header, footer) holds something
//! that can produce ratatui lines. Text, lines, whole `Text` blocks and
//! [`Title`]s all qualify; [`Empty`] is the no-op default.

use std::fmt;

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use crate::text::{Strings, Title};

/// Something that renders into lines.
pub trait Content: fmt::Debug {
    fn lines(&self, strings: &Strings) -> Vec<Line<'static>>;

    /// Whether this content renders nothing at all.
    fn is_empty(&self) -> bool {
        false
    }
}

/// Renders nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Content for Empty {
    fn lines(&self, _strings: &Strings) -> Vec<Line<'static>> {
        Vec::new()
    }

    fn is_empty(&self) -> bool {
        true
    }
}

impl Content for Title {
    fn lines(&self, strings: &Strings) -> Vec<Line<'static>> {
        vec![Line::raw(self.resolve(strings).to_string())]
    }
}

impl Content for &'static str {
    fn lines(&self, _strings: &Strings) -> Vec<Line<'static>> {
        vec![Line::raw(*self)]
    }
}

impl Content for String {
    fn lines(&self, _strings: &Strings) -> Vec<Line<'static>> {
        vec![Line::raw(self.clone())]
    }
}

impl Content for Span<'static> {
    fn lines(&self, _strings: &Strings) -> Vec<Line<'static>> {
        vec![Line::from(self.clone())]
    }
}

impl Content for Line<'static> {
    fn lines(&self, _strings: &Strings) -> Vec<Line<'static>> {
        vec![self.clone()]
    }
}

impl Content for Vec<Line<'static>> {
    fn lines(&self, _strings: &Strings) -> Vec<Line<'static>> {
        self.clone()
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl Content for Text<'static> {
    fn lines(&self, _strings: &Strings) -> Vec<Line<'static>> {
        self.lines.clone()
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A title rendered with a fixed style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledTitle {
    pub title: Title,
    pub style: Style,
}

impl StyledTitle {
    pub fn new(title: impl Into<Title>, style: Style) -> Self {
        Self {
            title: title.into(),
            style,
        }
    }
}

impl Content for StyledTitle {
    fn lines(&self, strings: &Strings) -> Vec<Line<'static>> {
        vec![Line::styled(
            self.title.resolve(strings).to_string(),
            self.style,
        )]
    }
}

/// Boxed slot content.
#[derive(Debug)]
pub struct Slot(Box<dyn Content>);

impl Slot {
    pub fn new(content: impl Content + 'static) -> Self {
        Slot(Box::new(content))
    }

    pub fn empty() -> Self {
        Slot::new(Empty)
    }

    pub fn lines(&self, strings: &Strings) -> Vec<Line<'static>> {
        self.0.lines(strings)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot::empty()
    }
}

impl<C: Content + 'static> From<C> for Slot {
    fn from(content: C) -> Self {
        Slot::new(content)
    }
}
