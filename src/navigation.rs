//! Push/pop navigation stack.
//!
//! The stack never empties: the root screen stays put and `pop` on the
//! root is a no-op.

use ratatui::text::Line;

/// A screen on the stack along with its title.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<S> {
    pub screen: S,
    pub title: Vec<Line<'static>>,
}

#[derive(Debug, Clone)]
pub struct NavigationStack<S> {
    entries: Vec<Entry<S>>,
}

impl<S> NavigationStack<S> {
    pub fn new(root: S, title: Vec<Line<'static>>) -> Self {
        Self {
            entries: vec![Entry {
                screen: root,
                title,
            }],
        }
    }

    pub fn push(&mut self, screen: S, title: Vec<Line<'static>>) {
        self.entries.push(Entry { screen, title });
    }

    /// Pop the top screen. Returns `None` when already at the root.
    pub fn pop(&mut self) -> Option<S> {
        if self.entries.len() > 1 {
            self.entries.pop().map(|entry| entry.screen)
        } else {
            None
        }
    }

    /// Pop back to the root screen.
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    pub fn top(&self) -> &Entry<S> {
        // Invariant: never empty
        &self.entries[self.entries.len() - 1]
    }

    pub fn screen(&self) -> &S {
        &self.top().screen
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_root(&self) -> bool {
        self.entries.len() == 1
    }

    /// Titles from the root to the top, for breadcrumb rendering.
    pub fn titles(&self) -> impl Iterator<Item = &[Line<'static>]> {
        self.entries.iter().map(|entry| entry.title.as_slice())
    }
}
