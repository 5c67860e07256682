use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Default product name stamped into outbound payloads
pub const DEFAULT_PRODUCT_NAME: &str = "HealthRemind Pro";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl Config {
    pub fn product_name(&self) -> String {
        self.product_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string())
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("REMIND_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("remind").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("remind").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "remind", "remind")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("remind"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("remind"));
    }
    directories::ProjectDirs::from("io", "remind", "remind")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name_defaults() {
        let config = Config::default();
        assert_eq!(config.product_name(), DEFAULT_PRODUCT_NAME);

        let config = Config {
            product_name: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(config.product_name(), DEFAULT_PRODUCT_NAME);

        let config = Config {
            product_name: Some("Clinic Beacon".to_string()),
            ..Config::default()
        };
        assert_eq!(config.product_name(), "Clinic Beacon");
    }

    #[test]
    fn test_parse_config_toml() {
        let config: Config = toml::from_str(
            r#"
            product_name = "Clinic Beacon"

            [webhook]
            url = "https://hooks.example.com/catch/42"
            "#,
        )
        .unwrap();
        assert_eq!(config.product_name(), "Clinic Beacon");
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://hooks.example.com/catch/42")
        );
    }
}
