//! Application configuration module
//!
//! Client-side configuration: where the server lives and how long the editor
//! waits after the last keystroke before persisting the note.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Delay between the last local edit and the persistence save
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Server URL used when none is configured
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the server (http or https)
    pub server_url: Url,
    /// Debounce window for persisting edits
    pub save_debounce: Duration,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// URL of an API path such as `/api/notes`
    pub fn api_url(&self, path: &str) -> Result<Url, ConfigError> {
        self.server_url
            .join(path)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// URL of the room socket, `ws://` or `wss://` matching the server scheme
    pub fn socket_url(&self) -> Result<Url, ConfigError> {
        let mut url = self.api_url("/socket")?;
        let scheme = match url.scheme() {
            "https" => "wss",
            _ => "ws",
        };
        url.set_scheme(scheme)
            .map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
        Ok(url)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    save_debounce: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Override the save debounce
    pub fn save_debounce(mut self, delay: Duration) -> Self {
        self.save_debounce = Some(delay);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let raw = self
            .server_url
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url =
            Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", raw, e)))?;

        match server_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::InvalidUrl(format!(
                    "unsupported scheme '{}' in {}",
                    other, raw
                )))
            }
        }

        let save_debounce = self.save_debounce.unwrap_or(SAVE_DEBOUNCE);
        if save_debounce.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "save_debounce",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(AppConfig {
            server_url,
            save_debounce,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
