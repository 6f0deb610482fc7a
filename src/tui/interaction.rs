//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! registry.register(
//!     InteractiveRegion::clickable("drill_down_row", row_area, Action::ChooseRow(2))
//!         .with_priority(1),
//! );
//! ```

use ratatui::layout::{Position, Rect};

use crate::events::Action;
use crate::log;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    pub bounds: Rect,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: Rect, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(id: &'static str, bounds: Rect, scroll_up: Action, scroll_down: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(Position::new(x, y))
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: Rect, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Register a scrollable region
    pub fn register_scroll(
        &mut self,
        id: &'static str,
        bounds: Rect,
        scroll_up: Action,
        scroll_down: Action,
    ) {
        self.register(InteractiveRegion::scrollable(
            id,
            bounds,
            scroll_up,
            scroll_down,
        ));
    }

    /// Highest-priority region at `(x, y)` that `pick` returns an action for.
    fn dispatch(&self, x: u16, y: u16, pick: impl Fn(&InteractiveRegion) -> Option<Action>) -> Action {
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y) && pick(r).is_some())
            .collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        match candidates.first() {
            Some(region) => {
                log::log(&format!("[MOUSE] {} at ({}, {})", region.id, x, y));
                pick(region).unwrap_or(Action::None)
            }
            None => Action::None,
        }
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_click)
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_up)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = InteractiveRegion::clickable("test", Rect::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable("form_row", Rect::new(0, 0, 100, 100), Action::OpenRow(0))
                .with_priority(0),
        );
        registry.register(
            InteractiveRegion::clickable("help_popup", Rect::new(20, 20, 60, 60), Action::CloseHelp)
                .with_priority(10),
        );

        assert_eq!(registry.handle_click(50, 50), Action::CloseHelp);
        assert_eq!(registry.handle_click(5, 5), Action::OpenRow(0));
    }

    #[test]
    fn test_scroll_ignores_click_only_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("row", Rect::new(0, 0, 10, 1), Action::ChooseRow(0));
        registry.register_scroll("list", Rect::new(0, 0, 10, 10), Action::CursorUp, Action::CursorDown);

        assert_eq!(registry.handle_scroll_down(1, 0), Action::CursorDown);
        assert_eq!(registry.handle_click(1, 0), Action::ChooseRow(0));
    }
}
