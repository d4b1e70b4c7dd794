//! Shared storage constructors for all platforms.
//!
//! Returns [`store`] types backed by the appropriate [`store::StorageArea`]:
//! - **Web** (WASM + `web` feature): `localStorage` / `sessionStorage` via [`store::WebStorage`]
//! - **Desktop / Mobile** (native): filesystem via [`store::FileArea`] for the
//!   persistent area and a process-wide [`store::MemoryArea`] for the short-lived one

use store::{DataStore, PesoConfig, SessionManager, StorageArea};

/// Create the portal's data store on the platform's persistent area.
pub fn make_store() -> DataStore<impl StorageArea> {
    DataStore::new(persistent_area())
}

/// Create a session manager over the platform's two areas.
pub fn make_session_manager(
    config: &PesoConfig,
) -> SessionManager<impl StorageArea, impl StorageArea> {
    SessionManager::with_config(
        persistent_area(),
        short_lived_area(),
        config.session.clone(),
    )
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn persistent_area() -> impl StorageArea {
    store::WebStorage::local()
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn short_lived_area() -> impl StorageArea {
    store::WebStorage::session()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn persistent_area() -> impl StorageArea {
    #[cfg(not(target_arch = "wasm32"))]
    let base = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    #[cfg(target_arch = "wasm32")]
    let base = std::path::PathBuf::from(".");
    store::FileArea::new(base.join("peso"))
}

/// Lives as long as the process, like a browser session.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn short_lived_area() -> impl StorageArea {
    use std::sync::OnceLock;

    static SESSION: OnceLock<store::MemoryArea> = OnceLock::new();
    SESSION.get_or_init(store::MemoryArea::new).clone()
}
