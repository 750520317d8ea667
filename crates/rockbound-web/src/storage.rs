use std::cell::RefCell;
use std::rc::Rc;

use rockbound_engine::{KeyValueStore, MemoryStore, SharedStore};
use web_sys::Storage;

/// `window.localStorage` as a `KeyValueStore`.
///
/// Browser storage can throw (quota exceeded, privacy mode); failures are
/// logged and otherwise behave like a missing item.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the page's local storage. `None` outside a window or when the
    /// browser refuses access.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            log::warn!("localStorage: could not write {}: {:?}", key, err);
        }
    }

    fn remove_item(&mut self, key: &str) {
        if let Err(err) = self.storage.remove_item(key) {
            log::warn!("localStorage: could not remove {}: {:?}", key, err);
        }
    }
}

/// Shared store for the game: local storage when available, memory otherwise.
pub fn browser_store() -> SharedStore {
    match LocalStorageStore::open() {
        Some(store) => Rc::new(RefCell::new(store)),
        None => {
            log::warn!("localStorage unavailable, progress will not persist");
            MemoryStore::shared()
        }
    }
}
