use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use nws_core::{Configuration, Format};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

/// Settings stored on disk. Every field is optional; unset fields fall back
/// to the library defaults.
///
/// Example TOML:
/// user_agent = "(my-station, me@example.com)"
/// format = "geojson"
/// timeout_secs = 10
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub user_agent: Option<String>,
    pub base_url: Option<String>,
    pub format: Option<Format>,
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Save settings to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let toml = self.to_toml()?;
        fs::write(&path, toml)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))?;

        Ok(path)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "nws-rs", "nws-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize settings to TOML")
    }

    /// Library configuration with these settings applied over the defaults.
    pub fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::default();

        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.as_str());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.as_str());
        }
        if let Some(format) = self.format {
            config = config.with_default_format(format);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nws_core::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

    #[test]
    fn empty_settings_keep_library_defaults() {
        let config = Settings::default().to_configuration();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.default_format, Format::GeoJson);
    }

    #[test]
    fn parses_partial_file() {
        let settings = Settings::from_toml(
            r#"
            user_agent = "(my-station, me@example.com)"
            format = "jsonld"
            "#,
        )
        .expect("valid settings");

        assert_eq!(settings.format, Some(Format::JsonLd));
        assert!(settings.base_url.is_none());

        let config = settings.to_configuration();
        assert_eq!(config.user_agent, "(my-station, me@example.com)");
        assert_eq!(config.default_format, Format::JsonLd);
    }

    #[test]
    fn timeout_is_seconds() {
        let settings = Settings {
            timeout_secs: Some(5),
            ..Settings::default()
        };

        assert_eq!(settings.to_configuration().timeout, Duration::from_secs(5));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Settings::from_toml(r#"format = "yaml""#).is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let settings = Settings {
            user_agent: Some("(ci, ci@example.com)".into()),
            base_url: Some("http://localhost:9000".into()),
            format: Some(Format::Cap),
            timeout_secs: Some(12),
        };

        let text = settings.to_toml().expect("serializable");
        assert_eq!(Settings::from_toml(&text).expect("parsable"), settings);
    }
}
