//! Single-choice list picker.
//!
//! A [`ListPicker`] shows a summary row (label plus the current value) and,
//! once disclosed, a drill-down list of every candidate with the current
//! value marked. Choosing a different row writes the host-owned
//! [`SelectionBinding`]; choosing the marked row does nothing.

mod binding;
mod candidate;
mod component;
mod options;
mod render;
mod slot;
mod traits;

pub use binding::SelectionBinding;
pub use candidate::Candidate;
pub use component::{Choice, ListPicker, Row, Summary};
pub use options::{LabelSlot, PickerOptions, Slots};
pub use render::{DrillDown, DrillDownLayout, PickerStyle, SummaryRow};
pub use slot::{Content, Empty, Slot, StyledTitle};
pub use traits::Picker;
