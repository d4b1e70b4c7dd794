pub mod area;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod host;
pub mod models;
pub mod seed;
pub mod session;

mod memory;
pub use memory::MemoryArea;

mod file_store;
pub use file_store::FileArea;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use area::{keys, StorageArea};
pub use config::{PesoConfig, ProfileConfig, SessionConfig};
pub use constants::{ApplicationStatus, UserRole};
pub use data::DataStore;
pub use error::StoreError;
pub use host::{Navigator, Notifier};
pub use models::{Profile, Requirement, Resume, Settings, User, UserId};
pub use seed::initialize_mock_data;
pub use session::SessionManager;
