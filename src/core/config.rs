use super::quote::QuoteName;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_DOLARAPI_URL: &str = "https://dolarapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

fn default_base_url() -> String {
    DEFAULT_DOLARAPI_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DolarApiProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for DolarApiProviderConfig {
    fn default() -> Self {
        DolarApiProviderConfig {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub dolarapi: DolarApiProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Quote selected when a session starts
    #[serde(default)]
    pub default_quote: QuoteName,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ar", "efund", "efund")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        // An empty document parses to unit, not to a struct with defaults
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  dolarapi:
    base_url: "http://example.com/dolar"
    request_timeout_secs: 2
default_quote: blue
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.providers.dolarapi.base_url, "http://example.com/dolar");
        assert_eq!(config.providers.dolarapi.request_timeout_secs, 2);
        assert_eq!(config.default_quote, QuoteName::Blue);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("default_quote: mep").unwrap();
        assert_eq!(config.providers.dolarapi.base_url, DEFAULT_DOLARAPI_URL);
        assert_eq!(
            config.providers.dolarapi.request_timeout_secs,
            DEFAULT_TIMEOUT_SECS
        );
        assert_eq!(config.default_quote, QuoteName::Mep);

        let yaml_partial = r#"
providers:
  dolarapi:
    base_url: "http://localhost:8080"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_partial).unwrap();
        assert_eq!(config.providers.dolarapi.base_url, "http://localhost:8080");
        assert_eq!(
            config.providers.dolarapi.request_timeout_secs,
            DEFAULT_TIMEOUT_SECS
        );
        assert_eq!(config.default_quote, QuoteName::Official);
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "default_quote: oficial")?;
        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(config, AppConfig::default());

        let empty = tempfile::NamedTempFile::new()?;
        assert_eq!(AppConfig::load_from_path(empty.path())?, AppConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/efund/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }

    #[test]
    fn test_invalid_quote_in_config_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_quote: cripto").unwrap();
        assert!(AppConfig::load_from_path(file.path()).is_err());
    }
}
