//! Cursor trait shared by list-based views.
//!
//! The cursor is where keyboard focus sits; it is independent of the bound
//! selection value.

/// A list with a movable cursor.
///
/// # Example
///
/// ```
/// use listpick::picker::Picker;
///
/// struct Menu {
///     rows: Vec<&'static str>,
///     cursor: usize,
/// }
///
/// impl Picker for Menu {
///     type Item = &'static str;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.rows
///     }
///
///     fn cursor(&self) -> usize {
///         self.cursor
///     }
///
///     fn set_cursor(&mut self, index: usize) {
///         self.cursor = index;
///     }
/// }
///
/// let mut menu = Menu { rows: vec!["a", "b"], cursor: 0 };
/// menu.select_prev();
/// assert_eq!(menu.focused(), Some(&"b"));
/// ```
pub trait Picker {
    type Item;

    fn items(&self) -> &[Self::Item];

    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, index: usize);

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Move to the next row (wraps around)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let next = (self.cursor() + 1) % self.len();
            self.set_cursor(next);
        }
    }

    /// Move to the previous row (wraps around)
    fn select_prev(&mut self) {
        if !self.is_empty() {
            let prev = self.cursor().checked_sub(1).unwrap_or(self.len() - 1);
            self.set_cursor(prev);
        }
    }

    /// Item under the cursor
    fn focused(&self) -> Option<&Self::Item> {
        self.items().get(self.cursor())
    }

    /// Move to `index`, clamped to the last row
    fn select_index(&mut self, index: usize) {
        if !self.is_empty() {
            self.set_cursor(index.min(self.len() - 1));
        }
    }

    fn reset_cursor(&mut self) {
        self.set_cursor(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rows {
        items: Vec<u8>,
        cursor: usize,
    }

    impl Picker for Rows {
        type Item = u8;

        fn items(&self) -> &[u8] {
            &self.items
        }

        fn cursor(&self) -> usize {
            self.cursor
        }

        fn set_cursor(&mut self, index: usize) {
            self.cursor = index;
        }
    }

    #[test]
    fn test_wraparound() {
        let mut rows = Rows { items: vec![1, 2, 3], cursor: 2 };
        rows.select_next();
        assert_eq!(rows.cursor(), 0);
        rows.select_prev();
        assert_eq!(rows.cursor(), 2);
    }

    #[test]
    fn test_select_index_clamps() {
        let mut rows = Rows { items: vec![1, 2, 3], cursor: 0 };
        rows.select_index(10);
        assert_eq!(rows.focused(), Some(&3));
    }

    #[test]
    fn test_empty_is_noop() {
        let mut rows = Rows { items: vec![], cursor: 0 };
        rows.select_next();
        rows.select_prev();
        rows.select_index(4);
        assert_eq!(rows.cursor(), 0);
        assert!(rows.focused().is_none());
    }
}
