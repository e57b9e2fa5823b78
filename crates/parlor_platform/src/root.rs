//! Document-root capability
//!
//! The theme layer marks the document root with a class per effective color
//! scheme; external stylesheets key off these markers. The capability is
//! deliberately dumb — the exactly-one-marker invariant is owned by the
//! theme controller, not by implementations.

use std::sync::Mutex;

/// Class markers on the document root element.
pub trait DomRoot: Send + Sync {
    /// Add `class` to the root element's class list.
    fn add_class(&self, class: &str);

    /// Remove `class` from the root element's class list.
    fn remove_class(&self, class: &str);
}

/// Headless stub: class changes are accepted and discarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRoot;

impl DomRoot for NoopRoot {
    fn add_class(&self, _class: &str) {}

    fn remove_class(&self, _class: &str) {}
}

/// In-memory class list, for tests and headless snapshots.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    classes: Mutex<Vec<String>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current class list, in application order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.lock().unwrap().clone()
    }
}

impl DomRoot for MemoryRoot {
    fn add_class(&self, class: &str) {
        let mut classes = self.classes.lock().unwrap();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.classes.lock().unwrap().retain(|c| c != class);
    }
}
