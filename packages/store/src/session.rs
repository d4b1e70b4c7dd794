//! # Session manager: the logged-in user
//!
//! The current user is a copy of their [`User`] record stored under
//! [`keys::LOGGED_IN_USER`]. Where it goes depends on the "remember me"
//! choice at login:
//!
//! - remembered → the **persistent** area (survives browser restarts)
//! - otherwise → the **short-lived** area (gone when the browser session ends)
//!
//! Reads prefer the persistent area unconditionally. Logging in again with the
//! other choice does not clear the first copy, so a stale remembered session
//! keeps winning until logout; [`SessionManager::set_logged_in_user`] logs a
//! warning when it notices this.

use crate::area::{keys, StorageArea};
use crate::config::SessionConfig;
use crate::error::StoreError;
use crate::host::Navigator;
use crate::models::User;

#[derive(Clone, Debug)]
pub struct SessionManager<P: StorageArea, S: StorageArea> {
    persistent: P,
    short_lived: S,
    config: SessionConfig,
}

impl<P: StorageArea, S: StorageArea> SessionManager<P, S> {
    pub fn new(persistent: P, short_lived: S) -> Self {
        Self::with_config(persistent, short_lived, SessionConfig::default())
    }

    pub fn with_config(persistent: P, short_lived: S, config: SessionConfig) -> Self {
        Self {
            persistent,
            short_lived,
            config,
        }
    }

    /// Record `user` as logged in.
    pub fn set_logged_in_user(&self, user: &User, remember: bool) -> Result<(), StoreError> {
        let text = serde_json::to_string(user)
            .map_err(|e| StoreError::serialize(keys::LOGGED_IN_USER, e))?;

        if remember {
            if self.short_lived.get_item(keys::LOGGED_IN_USER).is_some() {
                tracing::warn!("short-lived area still holds a previous session");
            }
            self.persistent.set_item(keys::LOGGED_IN_USER, &text)?;
        } else {
            if self.persistent.get_item(keys::LOGGED_IN_USER).is_some() {
                tracing::warn!(
                    "remembered session still present; it will take precedence over this login"
                );
            }
            self.short_lived.set_item(keys::LOGGED_IN_USER, &text)?;
        }
        tracing::debug!("user {} logged in (remember: {})", user.id, remember);
        Ok(())
    }

    /// The logged-in user, persistent area first.
    pub fn get_logged_in_user(&self) -> Result<Option<User>, StoreError> {
        let raw = self
            .persistent
            .get_item(keys::LOGGED_IN_USER)
            .filter(|v| !v.is_empty())
            .or_else(|| self.short_lived.get_item(keys::LOGGED_IN_USER));

        match raw.filter(|v| !v.is_empty()) {
            Some(text) => serde_json::from_str(&text)
                .map_err(|e| StoreError::parse(keys::LOGGED_IN_USER, e)),
            None => Ok(None),
        }
    }

    /// Clear the session from both areas and leave for the landing page.
    pub fn logout_user(&self, navigator: &impl Navigator) {
        self.persistent.remove_item(keys::LOGGED_IN_USER);
        self.short_lived.remove_item(keys::LOGGED_IN_USER);
        navigator.navigate(&self.config.landing_page);
    }
}
