use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors that can occur during config operations
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not readable: {0}")]
    Unreadable(String),

    #[error("TOML parsing error: {0}")]
    TomlError(String),
}

/// API configuration section.
///
/// Requests from the cluster frontends are already authenticated, so all of
/// this is optional; credentials only matter when querying from outside.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiSection {
    pub username: Option<String>,
    pub password: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigData {
    pub api: Option<ApiSection>,
}

/// Configuration for oarview: an optional TOML file overlaid with
/// `OARVIEW_*` environment variables.
///
/// File location: `~/.config/oarview/config.toml`. Environment variables
/// `OARVIEW_API_USER`, `OARVIEW_API_PASSWORD` and `OARVIEW_API_URL` take
/// precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Config {
    data: ConfigData,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let data = match Self::config_path() {
            Some(path) if path.exists() => Self::load_file(&path)?,
            _ => ConfigData::default(),
        };

        let mut config = Self { data };
        config.apply_env_overrides();
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oarview").join("config.toml"))
    }

    fn load_file(path: &PathBuf) -> Result<ConfigData, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&raw).map_err(|e| ConfigError::TomlError(e.to_string()))
    }

    fn apply_env_overrides(&mut self) {
        let api = self.data.api.get_or_insert_with(ApiSection::default);
        if let Ok(user) = std::env::var("OARVIEW_API_USER") {
            api.username = Some(user);
        }
        if let Ok(password) = std::env::var("OARVIEW_API_PASSWORD") {
            api.password = Some(password);
        }
        if let Ok(url) = std::env::var("OARVIEW_API_URL") {
            api.base_url = Some(url);
        }
    }

    /// Basic-auth credentials, only when both halves are present.
    pub fn credentials(&self) -> Option<(String, String)> {
        let api = self.data.api.as_ref()?;
        match (&api.username, &api.password) {
            (Some(user), Some(password)) => Some((user.clone(), password.clone())),
            _ => None,
        }
    }

    pub fn base_url(&self) -> Option<String> {
        self.data.api.as_ref().and_then(|api| api.base_url.clone())
    }

    #[cfg(test)]
    fn from_data(data: ConfigData) -> Self {
        Self { data }
    }
}

impl oarview_api::ApiConfig for Config {
    type Error = crate::CliError;

    fn get_credentials(&self) -> std::result::Result<Option<(String, String)>, Self::Error> {
        Ok(self.credentials())
    }

    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(self.base_url())
    }
}
