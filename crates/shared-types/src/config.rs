use serde::{Deserialize, Serialize};

/// Base URL used when neither `config.toml` nor the build environment sets one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Number of listings the homepage asks the backend for.
pub const DEFAULT_HOMEPAGE_LISTING_LIMIT: u32 = 8;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_homepage_listing_limit() -> u32 {
    DEFAULT_HOMEPAGE_LISTING_LIMIT
}

/// Client settings loaded from `config.toml`.
///
/// Every field has a default so that a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_homepage_listing_limit")]
    pub homepage_listing_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            homepage_listing_limit: default_homepage_listing_limit(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
}

impl ClientConfig {
    /// Parse the `[client]` table out of a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<AppConfig>(contents).map(|c| c.client)
    }

    /// Replace the base URL when an override is present and non-empty.
    /// Trailing slashes are stripped so paths can be joined with `/`.
    pub fn with_api_base_url(mut self, base: Option<&str>) -> Self {
        if let Some(url) = base.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.homepage_listing_limit, 8);
    }

    #[test]
    fn partial_toml_keeps_missing_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [client]
            homepage_listing_limit = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.homepage_listing_limit, 12);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn full_toml() {
        let config = ClientConfig::from_toml(
            r#"
            [client]
            api_base_url = "https://api.innosphere.vn/api"
            homepage_listing_limit = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.innosphere.vn/api");
        assert_eq!(config.homepage_listing_limit, 4);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(ClientConfig::from_toml("[client\napi_base_url = ").is_err());
    }

    #[test]
    fn override_replaces_base_url_and_strips_slash() {
        let config = ClientConfig::default().with_api_base_url(Some("https://x.test/api/"));
        assert_eq!(config.api_base_url, "https://x.test/api");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ClientConfig::default().with_api_base_url(Some("   "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        let config = ClientConfig::default().with_api_base_url(None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
