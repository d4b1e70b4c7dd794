//! # Portal configuration: `peso.toml`
//!
//! Page-level constants the helpers depend on, kept in one TOML file so a
//! deployment can move the landing page or restyle the profile modal without
//! touching code. The web binary embeds the file at build time.
//!
//! ## Structure
//!
//! ```toml
//! [session]
//! landing_page = "index.html"          # where logout sends the browser
//!
//! [profile]
//! container_id = "applicantProfileBody"
//! placeholder_image = "https://via.placeholder.com/150"
//! ```
//!
//! All structs derive `Default` (with the production values above) so that a
//! missing or empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `peso.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PesoConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Relative page path logout navigates to.
    #[serde(default = "default_landing_page")]
    pub landing_page: String,
}

fn default_landing_page() -> String {
    "index.html".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            landing_page: default_landing_page(),
        }
    }
}

/// Applicant profile modal configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Id of the element whose content the profile replaces.
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Picture shown when an applicant has none.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_container_id() -> String {
    "applicantProfileBody".to_string()
}

fn default_placeholder_image() -> String {
    "https://via.placeholder.com/150".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl PesoConfig {
    /// Builder method to set the logout landing page.
    pub fn with_landing_page(mut self, path: &str) -> Self {
        self.session.landing_page = path.to_string();
        self
    }

    /// Builder method to set the profile container id.
    pub fn with_container_id(mut self, id: &str) -> Self {
        self.profile.container_id = id.to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "peso.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
