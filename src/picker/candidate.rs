//! The candidate value contract.

use std::fmt::Debug;
use std::hash::Hash;

use crate::text::Title;

/// A value that can be offered by a [`ListPicker`](super::ListPicker).
///
/// Two candidates are the same choice iff they compare equal. The identity
/// key must agree with equality within one picker's collection.
///
/// # Example
///
/// ```
/// use listpick::picker::Candidate;
/// use listpick::text::Title;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Shape {
///     Circle,
///     Square,
/// }
///
/// impl Candidate for Shape {
///     type Id = &'static str;
///
///     fn id(&self) -> Self::Id {
///         match self {
///             Shape::Circle => "circle",
///             Shape::Square => "square",
///         }
///     }
///
///     fn title(&self) -> Title {
///         Title::key(format!("shape.{}", self.id()))
///     }
/// }
/// ```
pub trait Candidate: PartialEq {
    /// Stable identity key
    type Id: Eq + Hash + Clone + Debug;

    fn id(&self) -> Self::Id;

    /// Human-readable title (verbatim or a localizable key)
    fn title(&self) -> Title;
}
