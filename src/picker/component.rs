//! The list picker component.

use ratatui::text::Line;

use super::binding::SelectionBinding;
use super::candidate::Candidate;
use super::options::{PickerOptions, Slots};
use super::traits::Picker;
use crate::text::{Strings, Title};

/// Outcome of choosing a drill-down row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The binding was written
    Changed,
    /// The row already matched the selection; nothing was written
    Unchanged,
    /// No row at that index
    OutOfRange,
}

/// One row of the drill-down list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub title: String,
    /// Candidate equals the current selection
    pub selected: bool,
}

/// Data for the always-visible summary row.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub label: Vec<Line<'static>>,
    pub value: String,
}

/// Pick exactly one of a fixed set of candidates.
///
/// The current value lives in a [`SelectionBinding`] owned by the host. The
/// picker reads it for display and writes it only when a row that differs
/// from the current value is chosen.
#[derive(Debug)]
pub struct ListPicker<T: Candidate> {
    binding: SelectionBinding<T>,
    candidates: Vec<T>,
    slots: Slots,
    cursor: usize,
}

impl<T: Candidate> ListPicker<T> {
    pub fn new(binding: SelectionBinding<T>, candidates: Vec<T>, options: PickerOptions) -> Self {
        Self {
            binding,
            candidates,
            slots: options.resolve(),
            cursor: 0,
        }
    }

    /// Label and navigation title both show `title`.
    pub fn titled(
        title: impl Into<Title>,
        binding: SelectionBinding<T>,
        candidates: Vec<T>,
    ) -> Self {
        Self::new(binding, candidates, PickerOptions::titled(title))
    }

    /// No decoration at all.
    pub fn plain(binding: SelectionBinding<T>, candidates: Vec<T>) -> Self {
        Self::new(binding, candidates, PickerOptions::default())
    }

    pub fn binding(&self) -> &SelectionBinding<T> {
        &self.binding
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Whether `candidate` equals the current selection.
    pub fn is_selected(&self, candidate: &T) -> bool {
        self.binding.with(|current| current == candidate)
    }

    pub fn summary(&self, strings: &Strings) -> Summary {
        Summary {
            label: self.slots.label.lines(strings),
            value: self
                .binding
                .with(|current| current.title().resolve(strings).to_string()),
        }
    }

    /// Rows in collection order.
    pub fn rows(&self, strings: &Strings) -> Vec<Row> {
        self.candidates
            .iter()
            .map(|candidate| Row {
                title: candidate.title().resolve(strings).to_string(),
                selected: self.is_selected(candidate),
            })
            .collect()
    }

    pub fn navigation_title(&self, strings: &Strings) -> Vec<Line<'static>> {
        self.slots.navigation_title.lines(strings)
    }

    /// Prepare the drill-down screen: focus the selected row (or the first
    /// row) and return the screen title.
    pub fn disclose(&mut self, strings: &Strings) -> Vec<Line<'static>> {
        self.cursor = self
            .candidates
            .iter()
            .position(|candidate| self.is_selected(candidate))
            .unwrap_or(0);
        self.navigation_title(strings)
    }
}

impl<T: Candidate + Clone> ListPicker<T> {
    /// Write `candidate` into the binding unless it already equals the
    /// current value. Returns whether a write happened.
    pub fn toggle(&self, candidate: &T) -> bool {
        if self.is_selected(candidate) {
            return false;
        }
        self.binding.set(candidate.clone());
        true
    }

    /// Choose the row at `index`.
    pub fn choose(&mut self, index: usize) -> Choice {
        let Some(candidate) = self.candidates.get(index) else {
            return Choice::OutOfRange;
        };
        self.cursor = index;
        if self.toggle(candidate) {
            Choice::Changed
        } else {
            Choice::Unchanged
        }
    }

    /// Choose the row under the cursor.
    pub fn choose_focused(&mut self) -> Choice {
        self.choose(self.cursor)
    }
}

impl<T: Candidate> Picker for ListPicker<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.candidates
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
    }
}
