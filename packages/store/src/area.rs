//! # Storage areas: string key-value backends
//!
//! Everything the portal keeps client-side lives in one of two string-only
//! key-value areas, modelled on the browser's `localStorage` (persistent) and
//! `sessionStorage` (cleared when the browser session ends). [`StorageArea`] is
//! the seam between the typed layers ([`crate::DataStore`],
//! [`crate::SessionManager`]) and the concrete backend.
//!
//! | Backend | Used for |
//! |---------|----------|
//! | [`crate::MemoryArea`] | Tests, and the short-lived area on native targets. |
//! | [`crate::FileArea`] | Persistent area on native targets. |
//! | `WebStorage` (`web` feature, wasm only) | Browser `localStorage` / `sessionStorage`. |
//!
//! Reads and removals never fail from the caller's point of view: a backend
//! that cannot be reached behaves like an empty area. Writes report failure,
//! since a dropped write (quota exceeded) would otherwise go unnoticed.

use crate::error::StoreError;

/// Well-known keys used by the portal.
pub mod keys {
    pub const LOGGED_IN_USER: &str = "loggedInUser";
    pub const USERS: &str = "users";
    pub const JOBS: &str = "jobs";
    pub const APPLICATIONS: &str = "applications";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const SETTINGS: &str = "settings";
}

/// Synchronous string key-value area.
pub trait StorageArea {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str);
}

impl<A: StorageArea + ?Sized> StorageArea for &A {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key)
    }
}
