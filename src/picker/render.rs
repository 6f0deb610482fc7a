//! ratatui widgets for the summary row and the drill-down screen.
//!
//! Neither widget draws navigation chrome: the host decides where the
//! screen title goes (see [`ListPicker::disclose`](super::ListPicker::disclose)).

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::candidate::Candidate;
use super::component::ListPicker;
use super::traits::Picker;
use crate::text::Strings;

const CURSOR: &str = "> ";
const NO_CURSOR: &str = "  ";
const CHEVRON: &str = " ›";

/// Styles used by [`SummaryRow`] and [`DrillDown`].
#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyle {
    pub label: Style,
    /// Current value on the summary row
    pub value: Style,
    pub chevron: Style,
    pub row: Style,
    /// Cursor marker and the row under it
    pub cursor: Style,
    pub indicator: String,
    pub indicator_style: Style,
    pub header: Style,
    pub footer: Style,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            label: Style::new(),
            value: Style::new().fg(Color::DarkGray),
            chevron: Style::new().fg(Color::DarkGray),
            row: Style::new(),
            cursor: Style::new().add_modifier(Modifier::BOLD),
            indicator: "✓".to_string(),
            indicator_style: Style::new().fg(Color::Cyan),
            header: Style::new().fg(Color::DarkGray),
            footer: Style::new().fg(Color::DarkGray),
        }
    }
}

/// One-line (or multi-line, for composite labels) summary:
/// `[label] ............ [value] ›`
#[derive(Debug)]
pub struct SummaryRow<'a, T: Candidate> {
    picker: &'a ListPicker<T>,
    strings: &'a Strings,
    style: &'a PickerStyle,
    focused: bool,
}

impl<'a, T: Candidate> SummaryRow<'a, T> {
    pub fn new(picker: &'a ListPicker<T>, strings: &'a Strings, style: &'a PickerStyle) -> Self {
        Self {
            picker,
            strings,
            style,
            focused: false,
        }
    }

    /// Draw the focus cursor in front of the label.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows needed to draw this summary.
    pub fn height(&self) -> u16 {
        let lines = self.picker.slots().label.lines(self.strings).len();
        lines.max(1) as u16
    }
}

impl<T: Candidate> Widget for SummaryRow<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let summary = self.picker.summary(self.strings);

        let (marker, marker_style) = if self.focused {
            (CURSOR, self.style.cursor)
        } else {
            (NO_CURSOR, self.style.label)
        };
        let (label_x, _) = buf.set_stringn(area.x, area.y, marker, area.width as usize, marker_style);

        // Trailing value, right-aligned on the first line
        let value_width = Span::raw(summary.value.as_str()).width() as u16;
        let chevron_width = Span::raw(CHEVRON).width() as u16;
        let value_x = area
            .right()
            .saturating_sub(value_width + chevron_width)
            .max(label_x);
        let (chevron_x, _) = buf.set_stringn(
            value_x,
            area.y,
            &summary.value,
            area.right().saturating_sub(value_x) as usize,
            self.style.value,
        );
        buf.set_stringn(
            chevron_x,
            area.y,
            CHEVRON,
            area.right().saturating_sub(chevron_x) as usize,
            self.style.chevron,
        );

        let label_width = value_x.saturating_sub(label_x).saturating_sub(1);
        for (i, line) in summary.label.into_iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            let width = if i == 0 {
                label_width
            } else {
                area.right().saturating_sub(label_x)
            };
            let line = line.patch_style(self.style.label);
            buf.set_line(label_x, y, &line, width);
        }
    }
}

/// Where each part of the drill-down screen lands inside an area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillDownLayout {
    pub header: Rect,
    /// `(candidate index, row area)` for every visible row
    pub rows: Vec<(usize, Rect)>,
    pub footer: Rect,
}

impl DrillDownLayout {
    /// Candidate index of the row containing `(x, y)`.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(_, rect)| rect.contains((x, y).into()))
            .map(|(index, _)| *index)
    }
}

/// Header, one row per candidate, footer.
#[derive(Debug)]
pub struct DrillDown<'a, T: Candidate> {
    picker: &'a ListPicker<T>,
    strings: &'a Strings,
    style: &'a PickerStyle,
}

impl<'a, T: Candidate> DrillDown<'a, T> {
    pub fn new(picker: &'a ListPicker<T>, strings: &'a Strings, style: &'a PickerStyle) -> Self {
        Self {
            picker,
            strings,
            style,
        }
    }

    /// Non-empty header/footer get one blank spacer line towards the rows.
    /// Rows scroll so the cursor stays visible.
    pub fn layout(&self, area: Rect) -> DrillDownLayout {
        let slots = self.picker.slots();
        let framed = |lines: usize| if lines == 0 { 0 } else { lines as u16 + 1 };
        let header_height = framed(slots.header.lines(self.strings).len()).min(area.height);
        let footer_height =
            framed(slots.footer.lines(self.strings).len()).min(area.height - header_height);

        let header = Rect::new(area.x, area.y, area.width, header_height);
        let rows_height = area.height - header_height - footer_height;
        let rows_top = area.y + header_height;

        let visible = rows_height as usize;
        let cursor = self.picker.cursor();
        let offset = if visible > 0 && cursor >= visible {
            cursor + 1 - visible
        } else {
            0
        };
        let rows = (offset..self.picker.len().min(offset + visible))
            .map(|index| {
                let y = rows_top + (index - offset) as u16;
                (index, Rect::new(area.x, y, area.width, 1))
            })
            .collect::<Vec<_>>();

        // Footer follows the last visible row rather than the bottom edge
        let footer_y = rows_top + rows.len() as u16;
        let footer = Rect::new(area.x, footer_y, area.width, footer_height);

        DrillDownLayout {
            header,
            rows,
            footer,
        }
    }
}

impl<T: Candidate> Widget for DrillDown<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let layout = self.layout(area);
        let slots = self.picker.slots();

        for (i, line) in slots.header.lines(self.strings).into_iter().enumerate() {
            let y = layout.header.y + i as u16;
            if y >= layout.header.bottom() {
                break;
            }
            buf.set_line(area.x, y, &line.patch_style(self.style.header), area.width);
        }

        let rows = self.picker.rows(self.strings);
        let indicator_width = Span::raw(self.style.indicator.as_str()).width() as u16;
        for (index, rect) in &layout.rows {
            let row = &rows[*index];
            let focused = *index == self.picker.cursor();
            let (marker, title_style) = if focused {
                (CURSOR, self.style.row.patch(self.style.cursor))
            } else {
                (NO_CURSOR, self.style.row)
            };

            let indicator_x = rect.right().saturating_sub(indicator_width + 1);
            let line = Line::from(vec![
                Span::styled(marker, if focused { self.style.cursor } else { self.style.row }),
                Span::styled(row.title.as_str(), title_style),
            ]);
            buf.set_line(rect.x, rect.y, &line, indicator_x.saturating_sub(rect.x));

            if row.selected {
                buf.set_stringn(
                    indicator_x,
                    rect.y,
                    &self.style.indicator,
                    rect.right().saturating_sub(indicator_x) as usize,
                    self.style.indicator_style,
                );
            }
        }

        let footer_lines = slots.footer.lines(self.strings);
        for (i, line) in footer_lines.into_iter().enumerate() {
            // Skip the spacer line
            let y = layout.footer.y + 1 + i as u16;
            if y >= layout.footer.bottom() {
                break;
            }
            buf.set_line(area.x, y, &line.patch_style(self.style.footer), area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{PickerOptions, SelectionBinding};
    use crate::text::Title;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    impl Candidate for Color {
        type Id = u8;

        fn id(&self) -> u8 {
            *self as u8
        }

        fn title(&self) -> Title {
            match self {
                Color::Red => "Red".into(),
                Color::Green => "Green".into(),
                Color::Blue => "Blue".into(),
            }
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_summary_row_layout() {
        let picker = ListPicker::titled(
            "Color",
            SelectionBinding::new(Color::Green),
            vec![Color::Red, Color::Green, Color::Blue],
        );
        let strings = Strings::new();
        let style = PickerStyle::default();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        SummaryRow::new(&picker, &strings, &style)
            .focused(true)
            .render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "> Color      Green ›");
    }

    #[test]
    fn test_summary_height_follows_label() {
        let picker = ListPicker::new(
            SelectionBinding::new(Color::Red),
            vec![Color::Red],
            PickerOptions::new().label(vec![Line::raw("a"), Line::raw("b")]),
        );
        let strings = Strings::new();
        let style = PickerStyle::default();
        assert_eq!(SummaryRow::new(&picker, &strings, &style).height(), 2);

        let plain = ListPicker::plain(SelectionBinding::new(Color::Red), vec![Color::Red]);
        assert_eq!(SummaryRow::new(&plain, &strings, &style).height(), 1);
    }

    #[test]
    fn test_drill_down_marks_selection() {
        let picker = ListPicker::new(
            SelectionBinding::new(Color::Green),
            vec![Color::Red, Color::Green, Color::Blue],
            PickerOptions::new().header("Header").footer("Footer"),
        );
        let strings = Strings::new();
        let style = PickerStyle::default();
        let area = Rect::new(0, 0, 12, 7);
        let mut buf = Buffer::empty(area);

        DrillDown::new(&picker, &strings, &style).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "Header      ");
        assert_eq!(row_text(&buf, 1), "            ");
        assert_eq!(row_text(&buf, 2), "> Red       ");
        assert_eq!(row_text(&buf, 3), "  Green   ✓ ");
        assert_eq!(row_text(&buf, 4), "  Blue      ");
        assert_eq!(row_text(&buf, 5), "            ");
        assert_eq!(row_text(&buf, 6), "Footer      ");
    }

    #[test]
    fn test_layout_scrolls_to_cursor() {
        let mut picker = ListPicker::plain(
            SelectionBinding::new(Color::Red),
            vec![Color::Red, Color::Green, Color::Blue],
        );
        picker.select_index(2);
        let strings = Strings::new();
        let style = PickerStyle::default();
        let layout = DrillDown::new(&picker, &strings, &style).layout(Rect::new(0, 5, 10, 2));

        let indices: Vec<_> = layout.rows.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(layout.row_at(3, 6), Some(2));
        assert_eq!(layout.row_at(3, 9), None);
    }
}
