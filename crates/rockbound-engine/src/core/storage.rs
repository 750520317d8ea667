//! Key/value persistence surface.
//!
//! Mirrors the browser's `localStorage`: string keys, string values, all
//! calls synchronous. Games receive a `SharedStore` when their scenes are
//! built; the browser build backs it with `window.localStorage`, tests and
//! native builds with `MemoryStore`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

/// Store handle shared between the scenes and actors of one game.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store into a `SharedStore`.
    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("inventory"), None);
        store.set_item("inventory", "[]");
        assert_eq!(store.get_item("inventory").as_deref(), Some("[]"));
        store.remove_item("inventory");
        assert_eq!(store.get_item("inventory"), None);
    }

    #[test]
    fn shared_handles_see_same_data() {
        let store = MemoryStore::shared();
        let other = Rc::clone(&store);
        store.borrow_mut().set_item("k", "v");
        assert_eq!(other.borrow().get_item("k").as_deref(), Some("v"));
    }
}
