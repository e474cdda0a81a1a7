use std::sync::OnceLock;

use shared_types::ClientConfig;

const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Client settings, parsed once from the embedded `config.toml`.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| load(EMBEDDED_CONFIG, option_env!("INNOSPHERE_API_URL")))
}

fn load(raw: &str, api_url_override: Option<&str>) -> ClientConfig {
    let config = match ClientConfig::from_toml(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid config.toml; using defaults");
            ClientConfig::default()
        }
    };
    let config = config.with_api_base_url(api_url_override);
    tracing::info!(
        api_base_url = %config.api_base_url,
        listing_limit = config.homepage_listing_limit,
        "Client configuration loaded"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::DEFAULT_API_BASE_URL;

    #[test]
    fn embedded_file_parses() {
        assert!(ClientConfig::from_toml(EMBEDDED_CONFIG).is_ok());
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let config = load("[client", None);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn build_override_wins() {
        let config = load(EMBEDDED_CONFIG, Some("https://staging.innosphere.vn/api/"));
        assert_eq!(config.api_base_url, "https://staging.innosphere.vn/api");
        let config = load(EMBEDDED_CONFIG, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
