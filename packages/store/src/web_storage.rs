//! # Browser storage areas
//!
//! [`WebStorage`] is the [`StorageArea`] used on the **web platform**. It wraps
//! either `window.localStorage` (persistent) or `window.sessionStorage`
//! (short-lived, cleared when the tab's browser session ends).
//!
//! ## Handle management
//!
//! `WebStorage` only records which area it targets and looks the
//! `web_sys::Storage` object up on every call. `web_sys::Storage` is not
//! `Send`/`Sync`, and the lookup is a cheap property access on `window`.
//!
//! ## Error handling
//!
//! Reads and removals swallow errors (a missing `window` or a storage area
//! disabled by privacy settings behaves like an empty area) and log a
//! warning. Writes surface failures as [`StoreError::Write`]; the common case
//! is a `QuotaExceededError`.

use crate::area::StorageArea;
use crate::error::StoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Local,
    Session,
}

/// Browser `localStorage` / `sessionStorage` area.
#[derive(Clone, Copy, Debug)]
pub struct WebStorage {
    kind: Kind,
}

impl WebStorage {
    /// `window.localStorage`.
    pub fn local() -> Self {
        Self { kind: Kind::Local }
    }

    /// `window.sessionStorage`.
    pub fn session() -> Self {
        Self {
            kind: Kind::Session,
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.kind {
            Kind::Local => window.local_storage(),
            Kind::Session => window.session_storage(),
        };
        match storage {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("{:?} storage unavailable: {:?}", self.kind, e);
                None
            }
        }
    }
}

impl StorageArea for WebStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = self.storage() else {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: format!("{:?} storage unavailable", self.kind),
            });
        };
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("failed to remove `{}`: {:?}", key, e);
        }
    }
}
