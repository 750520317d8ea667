//! Persistent item list shared by every scene.
//!
//! Stored as a JSON array of strings in one slot of the game's key/value
//! store, so it survives scene changes (and, in the browser, reloads).
//! Doors read it to decide whether they open.

use rockbound_engine::SharedStore;

/// Slot holding the list.
pub const INVENTORY_SLOT: &str = "inventory";

/// Item id that opens doors.
pub const KEY_ITEM: &str = "key";

#[derive(Clone)]
pub struct InventoryStore {
    store: SharedStore,
    slot: String,
}

impl InventoryStore {
    pub fn new(store: SharedStore) -> Self {
        Self::with_slot(store, INVENTORY_SLOT)
    }

    pub fn with_slot(store: SharedStore, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    /// Empty the list. Levels call this when they start.
    pub fn reset(&self) {
        self.write(&[]);
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items().iter().any(|i| i == item)
    }

    /// Add `item` at the end. Duplicates are kept.
    pub fn append(&self, item: &str) {
        let mut items = self.items();
        items.push(item.to_string());
        self.write(&items);
        log::info!("inventory: added {}", item);
    }

    /// Stored items in insertion order. Missing or unreadable data reads as empty.
    pub fn items(&self) -> Vec<String> {
        let Some(raw) = self.store.borrow().get_item(&self.slot) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("inventory: ignoring malformed {:?}: {}", self.slot, err);
                Vec::new()
            }
        }
    }

    fn write(&self, items: &[String]) {
        match serde_json::to_string(items) {
            Ok(json) => self.store.borrow_mut().set_item(&self.slot, &json),
            Err(err) => log::error!("inventory: could not encode: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockbound_engine::MemoryStore;

    #[test]
    fn missing_slot_is_empty() {
        let inventory = InventoryStore::new(MemoryStore::shared());
        assert!(inventory.items().is_empty());
        assert!(!inventory.contains(KEY_ITEM));
    }

    #[test]
    fn append_then_contains_then_reset() {
        let inventory = InventoryStore::new(MemoryStore::shared());
        inventory.append(KEY_ITEM);
        assert!(inventory.contains(KEY_ITEM));

        inventory.reset();
        assert!(!inventory.contains(KEY_ITEM));
        assert!(inventory.items().is_empty());
    }

    #[test]
    fn stored_as_json_array() {
        let store = MemoryStore::shared();
        let inventory = InventoryStore::new(store.clone());
        inventory.append("key");
        inventory.append("key");
        assert_eq!(store.borrow().get_item(INVENTORY_SLOT).as_deref(), Some(r#"["key","key"]"#));
        assert_eq!(inventory.items().len(), 2);
    }

    #[test]
    fn malformed_slot_reads_empty_and_is_repaired() {
        let store = MemoryStore::shared();
        store.borrow_mut().set_item(INVENTORY_SLOT, "{not json");
        let inventory = InventoryStore::new(store.clone());

        assert!(!inventory.contains(KEY_ITEM));
        inventory.append(KEY_ITEM);
        assert_eq!(store.borrow().get_item(INVENTORY_SLOT).as_deref(), Some(r#"["key"]"#));
    }

    #[test]
    fn handles_share_the_slot() {
        let store = MemoryStore::shared();
        let level = InventoryStore::new(store.clone());
        let player = level.clone();
        player.append(KEY_ITEM);
        assert!(level.contains(KEY_ITEM));
    }
}
