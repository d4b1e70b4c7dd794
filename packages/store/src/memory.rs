use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::area::StorageArea;
use crate::error::StoreError;

/// In-memory StorageArea for testing and the native short-lived area.
///
/// Clones share the same underlying map, so a test can keep a handle to
/// inspect what a [`crate::DataStore`] or [`crate::SessionManager`] wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryArea {
    items: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_item` calls that reached this area.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageArea for MemoryArea {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let area = MemoryArea::new();
        assert!(area.get_item("users").is_none());

        area.set_item("users", "[]").unwrap();
        assert_eq!(area.get_item("users").as_deref(), Some("[]"));
        assert_eq!(area.write_count(), 1);

        area.remove_item("users");
        assert!(area.get_item("users").is_none());
        assert!(area.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let area = MemoryArea::new();
        let handle = area.clone();

        area.set_item("jobs", "[1]").unwrap();
        assert_eq!(handle.get_item("jobs").as_deref(), Some("[1]"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn test_overwrite_is_last_writer_wins() {
        let area = MemoryArea::new();
        area.set_item("settings", "{\"a\":1}").unwrap();
        area.set_item("settings", "{\"a\":2}").unwrap();
        assert_eq!(area.get_item("settings").as_deref(), Some("{\"a\":2}"));
        assert_eq!(area.len(), 1);
    }
}
