//! This crate contains all shared UI for the workspace: the applicant
//! profile renderer, session components and platform glue.

mod config;
pub use config::load_config;

mod repo;
pub use repo::{make_session_manager, make_store};

pub mod badges;
pub use badges::{generate_applicant_badges, render_badges, Badge};

pub mod profile;
pub use profile::{
    load_applicant_profile, render_applicant_profile, show_applicant_profile_modal,
    ApplicantProfileView, DetailRow, HostPage, ModalHandle, ProfileOutcome,
};

pub mod views;

mod host;
pub use host::{platform_host, LogHost};
#[cfg(target_arch = "wasm32")]
pub use host::{BrowserPage, JsModal};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod exports;

mod session;
pub use session::{use_config, use_session, LogoutButton, SessionProvider, SessionState};

/// Install the demo data on first load, alerting the user when it does.
pub fn seed_on_load() -> bool {
    match store::initialize_mock_data(&make_store(), &platform_host()) {
        Ok(seeded) => seeded,
        Err(e) => {
            tracing::error!("Failed to initialize mock data: {}", e);
            false
        }
    }
}
