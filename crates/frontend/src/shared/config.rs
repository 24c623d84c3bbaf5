use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the conversion backend, without a trailing slash
    pub base_url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://back2-0-jwos.onrender.com"
"#;

/// Build-time override for the backend base URL
const API_URL_OVERRIDE: Option<&str> = option_env!("CONVERTER_API_URL");

/// Load client configuration
///
/// Search order:
/// 1. `CONVERTER_API_URL` captured at build time
/// 2. Falls back to the embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    resolve_config(DEFAULT_CONFIG, API_URL_OVERRIDE)
}

fn resolve_config(source: &str, base_url_override: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(source)?;

    match base_url_override.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => {
            log::info!("Using API base URL from CONVERTER_API_URL: {}", url);
            config.api.base_url = url.to_string();
        }
        None => log::info!("Using default embedded configuration"),
    }

    config.api.base_url = normalize_base_url(&config.api.base_url)?;
    Ok(config)
}

fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("API base URL must start with http:// or https://, got {:?}", raw);
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = resolve_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.api.base_url, "https://back2-0-jwos.onrender.com");
    }

    #[test]
    fn test_override_wins_and_is_normalized() {
        let config = resolve_config(DEFAULT_CONFIG, Some(" http://localhost:8080/ ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = resolve_config(DEFAULT_CONFIG, Some("   ")).unwrap();
        assert_eq!(config.api.base_url, "https://back2-0-jwos.onrender.com");
    }

    #[test]
    fn test_invalid_scheme_is_rejected() {
        assert!(resolve_config(DEFAULT_CONFIG, Some("ftp://example.com")).is_err());
    }

    #[test]
    fn test_missing_section_is_rejected() {
        assert!(resolve_config("[database]\npath = \"x\"", None).is_err());
    }
}
