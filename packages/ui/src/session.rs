//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{PesoConfig, User};

use crate::{load_config, make_session_manager, platform_host};

/// Who is logged in, as read from session storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The portal configuration provided by the app, or the embedded `peso.toml`.
pub fn use_config() -> PesoConfig {
    try_use_context::<PesoConfig>().unwrap_or_else(load_config)
}

/// Provider component that loads the stored session once on mount.
/// Wrap your app with this component to enable [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_config();
    let session = use_signal(move || {
        let user = match make_session_manager(&config).get_logged_in_user() {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Failed to read stored session: {}", e);
                None
            }
        };
        SessionState { user }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button that logs the current user out and leaves for the landing page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let config = use_config();

    let onclick = move |_| {
        make_session_manager(&config).logout_user(&platform_host());
        session.set(SessionState::default());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
