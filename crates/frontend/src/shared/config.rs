use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Ключ localStorage, под которым хранится токен
    pub token_storage_key: String,
    /// Значения, которыми предзаполняется форма входа
    pub default_email: String,
    pub default_password: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://tamasaya.ru/api/laserio"

[auth]
token_storage_key = "laserio_token"
default_email = "admin@local"
default_password = "admin123"
"#;

static CONFIG: Lazy<Config> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load embedded config: {e:#}");
        Config::default()
    })
});

/// Load configuration
///
/// The embedded defaults are parsed first; the API base URL can be replaced at
/// build time through the `LASERIO_API_BASE` environment variable.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(base_url) = option_env!("LASERIO_API_BASE") {
        config.api.base_url = base_url.to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

/// Process-wide configuration, parsed once
pub fn config() -> &'static Config {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "https://tamasaya.ru/api/laserio");
        assert_eq!(config.auth.token_storage_key, "laserio_token");
    }

    #[test]
    fn test_loaded_base_url_has_no_trailing_slash() {
        let config = load_config().unwrap();
        assert!(!config.api.base_url.ends_with('/'));
    }
}
