//! # Records kept in the portal's storage
//!
//! These types are `Serialize + Deserialize` with field names matching the
//! JSON the pages read and write, so a record saved here is readable by any
//! other script sharing the same storage.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | One account in the `users` collection: numeric `id`, login `email`, plaintext `password`, [`UserRole`] and a role-shaped [`Profile`]. |
//! | [`Profile`] | Applicant details (applicant code, contact data, PWD / senior-citizen flags, picture, skills, resume, uploaded requirements). Admin and employer profiles only fill `name`. |
//! | [`Resume`] / [`Requirement`] | Descriptors of uploaded documents. |
//! | [`Settings`] | The `settings` singleton; currently the LMI submission gate. |
//!
//! ## Round trips
//!
//! Other page scripts write to the same collections, so a record read here and
//! saved back must come out unchanged:
//!
//! - keys the structs do not model are kept in an `extra` map
//! - profile fields track presence (`None` = key absent), so an admin profile
//!   stays `{"name": ...}` while an applicant keeps `"is_pwd": false`
//! - `resume` distinguishes absent from an explicit `null`
//! - a `null` in any other field reads as absent; the accessors
//!   ([`Profile::skills`], [`Profile::is_pwd`], ...) apply the defaults
//!
//! ## Applicant codes
//!
//! [`applicant_code`] formats the human-facing applicant identifier
//! (`PESO-2025-000001`), distinct from the numeric user id.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::constants::UserRole;

pub type UserId = u64;

/// An account in the `users` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Login key.
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Profile::is_empty"
    )]
    pub profile: Profile,
    /// Keys written by other pages.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: UserId, email: &str, password: &str, role: UserRole) -> Self {
        Self {
            id,
            email: email.to_string(),
            password: password.to_string(),
            role,
            profile: Profile::default(),
            extra: Map::new(),
        }
    }

    /// Builder method to attach a profile.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn is_applicant(&self) -> bool {
        self.role == UserRole::Applicant
    }

    /// Profile name, falling back to the email address when unset.
    pub fn display_name(&self) -> &str {
        if self.profile.name.is_empty() {
            &self.email
        } else {
            &self.profile.name
        }
    }
}

/// Role-shaped profile data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(
        rename = "applicantId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub applicant_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Person with disability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pwd: Option<bool>,
    /// Disability subtype; only meaningful when `is_pwd` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwd_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_senior: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// `Some(None)` is a stored `"resume": null`.
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume: Option<Option<Resume>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<Requirement>>,
    /// Keys written by other pages (employer details and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_pwd(&self) -> bool {
        self.is_pwd.unwrap_or(false)
    }

    pub fn is_senior(&self) -> bool {
        self.is_senior.unwrap_or(false)
    }

    /// Declared disability subtype, empty when unset.
    pub fn pwd_type(&self) -> &str {
        self.pwd_type.as_deref().unwrap_or_default()
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn resume(&self) -> Option<&Resume> {
        self.resume.as_ref().and_then(Option::as_ref)
    }

    pub fn requirements(&self) -> &[Requirement] {
        self.requirements.as_deref().unwrap_or_default()
    }
}

/// Read an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Keep a present-but-`null` value apart from an absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Uploaded resume descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resume {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            extra: Map::new(),
        }
    }
}

/// Uploaded requirement document (NBI clearance, certificates, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Display name, usually the uploaded file name.
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Requirement {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extra: Map::new(),
        }
    }
}

/// The `settings` singleton.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether employers may currently submit Labor Market Information reports.
    #[serde(rename = "lmiSubmissionOpen", default)]
    pub lmi_submission_open: bool,
}

/// Format an applicant code: `PESO-<year>-<sequence, zero-padded to 6>`.
pub fn applicant_code(year: i32, sequence: u32) -> String {
    format!("PESO-{year}-{sequence:06}")
}

/// Parse the sequence number back out of an applicant code for `year`.
pub fn applicant_code_sequence(code: &str, year: i32) -> Option<u32> {
    code.strip_prefix(&format!("PESO-{year}-"))?.parse().ok()
}
