//! # Filesystem-backed storage area
//!
//! [`FileArea`] is a [`StorageArea`] that keeps each key in its own file. It
//! stands in for the browser's persistent area on desktop and mobile builds so
//! seeded data and remembered sessions survive restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── users              # JSON array
//! ├── settings           # JSON object
//! └── loggedInUser       # JSON object, only while "remember me" is active
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base (see
//! `ui::make_store`).

use std::path::PathBuf;

use crate::area::StorageArea;
use crate::error::StoreError;

/// Filesystem-backed StorageArea for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileArea {
    base: PathBuf,
}

impl FileArea {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl StorageArea for FileArea {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error| StoreError::Write {
            key: key.to_string(),
            message: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(write_err)?;
        std::fs::write(self.item_path(key), value).map_err(write_err)
    }

    fn remove_item(&self, key: &str) {
        let path = self.item_path(key);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to remove {}: {}", path.display(), e);
            }
        }
    }
}
