//! # Data store: named collections on a storage area
//!
//! [`DataStore`] is the portal's mock database. Every collection (`users`,
//! `jobs`, `applications`, `notifications`) is a JSON array stored as a single
//! text value under its key in the persistent [`StorageArea`]; the `settings`
//! singleton is a JSON object under its own key.
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`get_data`](DataStore::get_data) | Parses the array under a key. An unset key (or a stored `null`) reads as an empty `Vec`; malformed JSON is returned as [`StoreError::Parse`]. |
//! | [`get_settings`](DataStore::get_settings) | Reads the singleton, falling back to [`Settings::default`]. |
//! | [`users`](DataStore::users) / [`find_user`](DataStore::find_user) | Typed access to the `users` collection; lookup is a linear scan returning the first match. |
//! | [`authenticate`](DataStore::authenticate) | Finds the user whose email and plaintext password match. |
//!
//! ## Write path
//!
//! Writes always replace the whole value ([`save_data`](DataStore::save_data),
//! [`save_settings`](DataStore::save_settings)). There is no merge and no
//! conflict detection: two tabs mutating the same collection overwrite each
//! other, last writer wins.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::area::{keys, StorageArea};
use crate::error::StoreError;
use crate::models::{applicant_code, applicant_code_sequence, Settings, User, UserId};

/// Typed accessor over the persistent storage area.
#[derive(Clone, Debug)]
pub struct DataStore<A: StorageArea> {
    area: A,
}

impl<A: StorageArea> DataStore<A> {
    pub fn new(area: A) -> Self {
        Self { area }
    }

    pub fn area(&self) -> &A {
        &self.area
    }

    /// Whether `key` holds a non-empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.area.get_item(key).is_some_and(|v| !v.is_empty())
    }

    /// Read the collection stored under `key`.
    pub fn get_data<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.area.get_item(key) else {
            return Ok(Vec::new());
        };
        let data: Option<Vec<T>> =
            serde_json::from_str(&raw).map_err(|e| StoreError::parse(key, e))?;
        Ok(data.unwrap_or_default())
    }

    /// Overwrite the collection stored under `key`.
    pub fn save_data<T: Serialize>(&self, key: &str, data: &[T]) -> Result<(), StoreError> {
        self.save_value(key, &data)
    }

    pub(crate) fn save_value<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let text = serde_json::to_string(value).map_err(|e| StoreError::serialize(key, e))?;
        self.area.set_item(key, &text)
    }

    pub fn get_settings(&self) -> Result<Settings, StoreError> {
        let Some(raw) = self.area.get_item(keys::SETTINGS) else {
            return Ok(Settings::default());
        };
        let settings: Option<Settings> =
            serde_json::from_str(&raw).map_err(|e| StoreError::parse(keys::SETTINGS, e))?;
        Ok(settings.unwrap_or_default())
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.save_value(keys::SETTINGS, settings)
    }

    pub fn users(&self) -> Result<Vec<User>, StoreError> {
        self.get_data(keys::USERS)
    }

    pub fn save_users(&self, users: &[User]) -> Result<(), StoreError> {
        self.save_data(keys::USERS, users)
    }

    /// First user with a matching id.
    pub fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users()?.into_iter().find(|u| u.id == id))
    }

    /// User whose email and password both match. Passwords are compared as
    /// stored (plaintext mock data).
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users()?
            .into_iter()
            .find(|u| u.email == email && u.password == password))
    }

    /// Next free applicant code for `year`, one past the highest in use.
    pub fn next_applicant_code(&self, year: i32) -> Result<String, StoreError> {
        let highest = self
            .users()?
            .iter()
            .filter_map(|u| u.profile.applicant_id.as_deref())
            .filter_map(|code| applicant_code_sequence(code, year))
            .max()
            .unwrap_or(0);
        Ok(applicant_code(year, highest + 1))
    }
}
