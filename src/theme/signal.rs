//! Observable holder for the current appearance.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::mode::AppearanceMode;

type Listener = Rc<dyn Fn(AppearanceMode)>;

/// Single source of truth for the page appearance.
///
/// Clones share the same value and listener list, so any region of the UI
/// can hold one and subscribe instead of polling. Lives on the UI thread.
#[derive(Clone)]
pub struct AppearanceSignal {
    value: Rc<Cell<AppearanceMode>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl AppearanceSignal {
    pub fn new(mode: AppearanceMode) -> Self {
        Self {
            value: Rc::new(Cell::new(mode)),
            listeners: Rc::new(RefCell::new(Vec::with_capacity(1))),
        }
    }

    pub fn get(&self) -> AppearanceMode {
        self.value.get()
    }

    /// Registers a listener called with the new mode after every change.
    pub fn subscribe(&self, listener: impl Fn(AppearanceMode) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Stores a new mode and notifies listeners when it differs.
    pub(crate) fn set(&self, mode: AppearanceMode) {
        if self.value.replace(mode) == mode {
            return;
        }
        // Snapshot so a listener may subscribe without a double borrow.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(mode);
        }
    }
}

impl std::fmt::Debug for AppearanceSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppearanceSignal")
            .field("value", &self.value.get())
            .field("listeners", &self.subscriber_count())
            .finish()
    }
}
