//! Picker construction options and slot resolution.
//!
//! [`PickerOptions`] carries the four optional decoration slots.
//! [`PickerOptions::resolve`] is the single place that decides what each
//! slot ends up rendering.

use super::slot::Slot;
use crate::text::Title;

/// How the summary-row label was supplied.
#[derive(Debug, Default)]
pub enum LabelSlot {
    /// No label
    #[default]
    Absent,
    /// Arbitrary content; never reused as the navigation title
    Content(Slot),
    /// Plain text; doubles as the navigation title unless one is given
    Shorthand(Title),
}

/// Optional decoration for a [`ListPicker`](super::ListPicker).
///
/// # Example
///
/// ```
/// use listpick::picker::PickerOptions;
///
/// // Label and navigation title both read "Favorite Color".
/// let options = PickerOptions::titled("Favorite Color").footer("Shown in the sidebar");
/// let slots = options.resolve();
/// assert!(!slots.navigation_title.is_empty());
/// assert!(slots.header.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct PickerOptions {
    pub label: LabelSlot,
    pub navigation_title: Option<Slot>,
    pub header: Option<Slot>,
    pub footer: Option<Slot>,
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand: `title` is both the label and the navigation title.
    pub fn titled(title: impl Into<Title>) -> Self {
        Self {
            label: LabelSlot::Shorthand(title.into()),
            ..Self::default()
        }
    }

    /// Label content. Replaces any shorthand title.
    pub fn label(mut self, content: impl Into<Slot>) -> Self {
        self.label = LabelSlot::Content(content.into());
        self
    }

    pub fn navigation_title(mut self, content: impl Into<Slot>) -> Self {
        self.navigation_title = Some(content.into());
        self
    }

    pub fn header(mut self, content: impl Into<Slot>) -> Self {
        self.header = Some(content.into());
        self
    }

    pub fn footer(mut self, content: impl Into<Slot>) -> Self {
        self.footer = Some(content.into());
        self
    }

    /// Resolve every slot to concrete content.
    pub fn resolve(self) -> Slots {
        let (label, shorthand) = match self.label {
            LabelSlot::Absent => (Slot::empty(), None),
            LabelSlot::Content(slot) => (slot, None),
            LabelSlot::Shorthand(title) => (Slot::from(title.clone()), Some(title)),
        };

        let navigation_title = match (self.navigation_title, shorthand) {
            (Some(slot), _) => slot,
            (None, Some(title)) => Slot::from(title),
            (None, None) => Slot::empty(),
        };

        Slots {
            label,
            navigation_title,
            header: self.header.unwrap_or_default(),
            footer: self.footer.unwrap_or_default(),
        }
    }
}

/// Resolved decoration slots. Fixed for the lifetime of a picker.
#[derive(Debug, Default)]
pub struct Slots {
    pub label: Slot,
    pub navigation_title: Slot,
    pub header: Slot,
    pub footer: Slot,
}
