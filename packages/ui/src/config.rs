//! The deployment's `peso.toml`, embedded at build time.
//!
//! The Dioxus app and the exports for plain page scripts both read it from
//! here, so logout lands on the same page whichever side triggers it.

use store::PesoConfig;

const CONFIG_TOML: &str = include_str!("../peso.toml");

/// Parse the embedded config, falling back to the defaults if it is invalid.
pub fn load_config() -> PesoConfig {
    PesoConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", PesoConfig::filename(), e);
        PesoConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let parsed = PesoConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(load_config(), parsed);
        assert_eq!(parsed.session.landing_page, "/");
        assert_eq!(parsed.profile, store::ProfileConfig::default());
    }
}
