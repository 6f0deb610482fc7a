//! Pick one value from a fixed list, with a summary row and a drill-down
//! screen, for ratatui applications.
//!
//! ```
//! use listpick::picker::{Candidate, Choice, ListPicker, PickerOptions, SelectionBinding};
//! use listpick::text::{Strings, Title};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Size {
//!     Small,
//!     Large,
//! }
//!
//! impl Candidate for Size {
//!     type Id = u8;
//!
//!     fn id(&self) -> u8 {
//!         *self as u8
//!     }
//!
//!     fn title(&self) -> Title {
//!         match self {
//!             Size::Small => "Small".into(),
//!             Size::Large => "Large".into(),
//!         }
//!     }
//! }
//!
//! let size = SelectionBinding::new(Size::Small);
//! let mut picker = ListPicker::new(
//!     size.clone(),
//!     vec![Size::Small, Size::Large],
//!     PickerOptions::titled("Size").footer("Applies to new windows"),
//! );
//!
//! assert_eq!(picker.summary(&Strings::new()).value, "Small");
//! assert_eq!(picker.choose(1), Choice::Changed);
//! assert_eq!(size.get(), Size::Large);
//! ```

pub mod navigation;
pub mod picker;
pub mod text;
