//! Display titles and the string catalog used to resolve them.
//!
//! A [`Title`] is either verbatim text or a localizable key. Keys are looked
//! up in a [`Strings`] catalog at render time; a key with no entry renders
//! as the key itself.

use std::borrow::Cow;
use std::collections::HashMap;

/// Text shown for a candidate or a shorthand label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Title {
    /// Shown exactly as written
    Verbatim(Cow<'static, str>),
    /// Looked up in the [`Strings`] catalog
    Key(Cow<'static, str>),
}

impl Title {
    /// Verbatim text.
    pub fn verbatim(text: impl Into<Cow<'static, str>>) -> Self {
        Title::Verbatim(text.into())
    }

    /// A localizable key.
    pub fn key(key: impl Into<Cow<'static, str>>) -> Self {
        Title::Key(key.into())
    }

    /// Resolve to displayable text.
    pub fn resolve<'a>(&'a self, strings: &'a Strings) -> &'a str {
        match self {
            Title::Verbatim(text) => text,
            Title::Key(key) => strings.get(key).unwrap_or(key),
        }
    }
}

impl From<&'static str> for Title {
    fn from(text: &'static str) -> Self {
        Title::Verbatim(Cow::Borrowed(text))
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Title::Verbatim(Cow::Owned(text))
    }
}

/// Key -> text catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Strings {
    entries: HashMap<String, String>,
}

impl Strings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry (builder style).
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn merge(&mut self, other: Strings) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for Strings {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_ignores_catalog() {
        let strings = Strings::new().with("Green", "Grün");
        assert_eq!(Title::from("Green").resolve(&strings), "Green");
    }

    #[test]
    fn test_key_lookup_and_fallback() {
        let strings = Strings::new().with("color.red", "Red");
        assert_eq!(Title::key("color.red").resolve(&strings), "Red");
        assert_eq!(Title::key("color.blue").resolve(&strings), "color.blue");
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = Strings::new().with("a", "1").with("b", "2");
        base.merge(Strings::new().with("b", "two"));
        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("two"));
        assert_eq!(base.len(), 2);
    }
}
