//! The demo form: sections of pickers with optional header/footer text.
//!
//! Pickers of different candidate types live side by side behind the
//! object-safe [`FormPicker`] trait.

use std::fmt::Debug;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use listpick::picker::{
    Candidate, Choice, DrillDown, DrillDownLayout, ListPicker, Picker, PickerStyle, SummaryRow,
};
use listpick::text::Strings;

/// Type-erased view of a [`ListPicker`].
pub trait FormPicker: Debug {
    fn summary_height(&self, strings: &Strings, style: &PickerStyle) -> u16;

    fn render_summary(
        &self,
        area: Rect,
        buf: &mut Buffer,
        strings: &Strings,
        style: &PickerStyle,
        focused: bool,
    );

    fn drill_down_layout(&self, area: Rect, strings: &Strings, style: &PickerStyle)
    -> DrillDownLayout;

    fn render_drill_down(&self, area: Rect, buf: &mut Buffer, strings: &Strings, style: &PickerStyle);

    fn disclose(&mut self, strings: &Strings) -> Vec<Line<'static>>;

    fn choose(&mut self, index: usize) -> Choice;

    fn choose_focused(&mut self) -> Choice;

    fn cursor_down(&mut self);

    fn cursor_up(&mut self);

    /// Title of the current selection
    fn value(&self, strings: &Strings) -> String;
}

impl<T: Candidate + Clone + Debug> FormPicker for ListPicker<T> {
    fn summary_height(&self, strings: &Strings, style: &PickerStyle) -> u16 {
        SummaryRow::new(self, strings, style).height()
    }

    fn render_summary(
        &self,
        area: Rect,
        buf: &mut Buffer,
        strings: &Strings,
        style: &PickerStyle,
        focused: bool,
    ) {
        SummaryRow::new(self, strings, style)
            .focused(focused)
            .render(area, buf);
    }

    fn drill_down_layout(
        &self,
        area: Rect,
        strings: &Strings,
        style: &PickerStyle,
    ) -> DrillDownLayout {
        DrillDown::new(self, strings, style).layout(area)
    }

    fn render_drill_down(&self, area: Rect, buf: &mut Buffer, strings: &Strings, style: &PickerStyle) {
        DrillDown::new(self, strings, style).render(area, buf);
    }

    fn disclose(&mut self, strings: &Strings) -> Vec<Line<'static>> {
        ListPicker::disclose(self, strings)
    }

    fn choose(&mut self, index: usize) -> Choice {
        ListPicker::choose(self, index)
    }

    fn choose_focused(&mut self) -> Choice {
        ListPicker::choose_focused(self)
    }

    fn cursor_down(&mut self) {
        self.select_next();
    }

    fn cursor_up(&mut self) {
        self.select_prev();
    }

    fn value(&self, strings: &Strings) -> String {
        self.summary(strings).value
    }
}

/// A titled group of pickers.
#[derive(Debug)]
pub struct Section {
    pub header: Option<&'static str>,
    pub footer: Option<&'static str>,
    pub pickers: Vec<Box<dyn FormPicker>>,
}

impl Section {
    pub fn new(header: Option<&'static str>, footer: Option<&'static str>) -> Self {
        Self {
            header,
            footer,
            pickers: vec![],
        }
    }

    pub fn with(mut self, picker: impl FormPicker + 'static) -> Self {
        self.pickers.push(Box::new(picker));
        self
    }
}

/// Position of a picker: `(section, picker)`.
pub type FieldId = (usize, usize);

/// All sections plus the focus cursor over every picker in order.
#[derive(Debug)]
pub struct Form {
    sections: Vec<Section>,
    fields: Vec<FieldId>,
    cursor: usize,
}

impl Form {
    pub fn new(sections: Vec<Section>) -> Self {
        let fields = sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.pickers.len()).map(move |p| (s, p)))
            .collect();
        Self {
            sections,
            fields,
            cursor: 0,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn picker(&self, field: FieldId) -> Option<&dyn FormPicker> {
        self.sections
            .get(field.0)
            .and_then(|s| s.pickers.get(field.1))
            .map(|p| p.as_ref())
    }

    pub fn picker_mut(&mut self, field: FieldId) -> Option<&mut (dyn FormPicker + 'static)> {
        self.sections
            .get_mut(field.0)
            .and_then(|s| s.pickers.get_mut(field.1))
            .map(|p| p.as_mut())
    }

    /// Flat row index of `field`.
    pub fn row_of(&self, field: FieldId) -> Option<usize> {
        self.fields.iter().position(|s| *s == field)
    }
}

impl Picker for Form {
    type Item = FieldId;

    fn items(&self) -> &[FieldId] {
        &self.fields
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
    }
}
