//! Two-way selection binding.
//!
//! The host owns the value; pickers hold clones of the binding, which all
//! share one cell. Writes bump a version counter and notify listeners so
//! the host knows to re-render.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Shared<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    listeners: RefCell<Vec<Listener<T>>>,
}

/// Shared mutable cell holding the current selection.
///
/// Single-threaded by construction (`!Send`): access is serialized by the
/// host's event loop.
pub struct SelectionBinding<T> {
    shared: Rc<Shared<T>>,
}

impl<T> SelectionBinding<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(value),
                version: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Run `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.value.borrow())
    }

    /// Replace the value and notify listeners.
    pub fn set(&self, value: T) {
        *self.shared.value.borrow_mut() = value;
        self.shared.version.set(self.shared.version.get() + 1);

        // Snapshot: listeners added during notification run from the next write
        let listeners = self.shared.listeners.borrow().clone();
        let value = self.shared.value.borrow();
        for listener in &listeners {
            listener(&value);
        }
    }

    /// Number of writes since creation.
    pub fn version(&self) -> u64 {
        self.shared.version.get()
    }

    /// Register a listener called after every write.
    ///
    /// Listeners must not write to the binding they observe. They may
    /// register further listeners.
    pub fn on_change(&self, listener: impl Fn(&T) + 'static) {
        self.shared.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Whether both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<T: Clone> SelectionBinding<T> {
    pub fn get(&self) -> T {
        self.shared.value.borrow().clone()
    }
}

impl<T> Clone for SelectionBinding<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SelectionBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionBinding")
            .field("value", &*self.shared.value.borrow())
            .field("version", &self.shared.version.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let binding = SelectionBinding::new(1);
        let other = binding.clone();
        other.set(2);
        assert_eq!(binding.get(), 2);
        assert!(binding.ptr_eq(&other));
        assert!(!binding.ptr_eq(&SelectionBinding::new(2)));
    }

    #[test]
    fn test_version_counts_writes() {
        let binding = SelectionBinding::new("a");
        assert_eq!(binding.version(), 0);
        binding.set("b");
        binding.set("b");
        assert_eq!(binding.version(), 2);
    }

    #[test]
    fn test_listeners_see_new_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let binding = SelectionBinding::new(0);
        let sink = Rc::clone(&seen);
        binding.on_change(move |v| sink.borrow_mut().push(*v));

        binding.set(3);
        binding.set(5);
        assert_eq!(*seen.borrow(), vec![3, 5]);
    }

    #[test]
    fn test_listener_may_register_listener() {
        let binding = SelectionBinding::new(0);
        let inner = binding.clone();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        binding.on_change(move |_| {
            let counter = Rc::clone(&counter);
            inner.on_change(move |_| counter.set(counter.get() + 1));
        });

        binding.set(1);
        assert_eq!(calls.get(), 0);
        binding.set(2);
        assert_eq!(calls.get(), 1);
    }
}
