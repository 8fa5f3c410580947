/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opening the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Values are layered, later sources overriding earlier ones:
 *
 * 1. Built-in defaults (port 5000, `sqlite://roomnotes.db`, `public/`)
 * 2. TOML file at `$ROOMNOTES_CONFIG`, or `<config dir>/roomnotes/config.toml`
 *    if it exists
 * 3. Environment: `SERVER_PORT` (or `PORT`), `DATABASE_URL`, `CLIENT_URL`,
 *    `PUBLIC_DIR`
 *
 * # Example config.toml
 *
 * ```toml
 * port = 8080
 * database_url = "sqlite:///var/lib/roomnotes/notes.db"
 * client_url = "https://notes.example.com"
 * public_dir = "/usr/share/roomnotes/public"
 * channel_capacity = 512
 * ```
 */

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::BackendError;
use crate::shared::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "ROOMNOTES_CONFIG";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://roomnotes.db";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Runtime configuration of the server binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    /// Allowed CORS origin; any origin when unset
    pub client_origin: Option<String>,
    /// Directory holding `index.html`, `room.html` and static assets
    pub public_dir: PathBuf,
    /// Events buffered per room channel before slow receivers lag
    pub channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            client_origin: None,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Shape of the optional TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    port: Option<u16>,
    database_url: Option<String>,
    client_url: Option<String>,
    public_dir: Option<PathBuf>,
    channel_capacity: Option<usize>,
}

impl ServerConfig {
    /// Load defaults, then the config file, then the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_file_path() {
            tracing::info!("Loading configuration from {}", path.display());
            config.apply_file(&path)?;
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from a TOML file
    pub fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(database_url) = file.database_url {
            self.database_url = database_url;
        }
        if let Some(client_url) = file.client_url {
            self.client_origin = non_empty(client_url);
        }
        if let Some(public_dir) = file.public_dir {
            self.public_dir = public_dir;
        }
        if let Some(channel_capacity) = file.channel_capacity {
            self.channel_capacity = channel_capacity;
        }
        Ok(())
    }

    /// Overlay values from environment variables
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            self.port = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "port",
                message: format!("'{}' is not a valid port", raw),
            })?;
        }
        if let Some(database_url) = lookup("DATABASE_URL") {
            self.database_url = database_url;
        }
        if let Some(client_url) = lookup("CLIENT_URL") {
            self.client_origin = non_empty(client_url);
        }
        if let Some(public_dir) = lookup("PUBLIC_DIR") {
            self.public_dir = PathBuf::from(public_dir);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("database_url"));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "channel_capacity",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Explicit config path, or the per-user default if that file exists
fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    let default = dirs::config_dir()?.join("roomnotes").join("config.toml");
    default.exists().then_some(default)
}

/// Open the SQLite pool and run migrations
///
/// The database file is created if it does not exist. In-memory URLs get a
/// single connection that is never recycled, since every SQLite memory
/// connection is its own database.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
