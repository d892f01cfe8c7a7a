use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "review_server.toml";

// Range bcrypt accepts for its cost factor.
const MIN_HASH_COST: u32 = 4;
const MAX_HASH_COST: u32 = 31;

// Ten years.
pub const MAX_SESSION_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

// Which store implementation backs the ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" => Some(Self::Postgres),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

// Runtime settings, resolved once at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub cors_origin: String,
    // Zero disables session expiry. With a TTL set, expired sessions are
    // pruned every `session_prune_interval_seconds`.
    pub session_ttl_seconds: u64,
    pub session_prune_interval_seconds: u64,
    pub password_hash_cost: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            storage_backend: StorageBackend::Postgres,
            database_url: None,
            database_max_connections: 5,
            cors_origin: "http://localhost:3002".to_string(),
            session_ttl_seconds: 0,
            session_prune_interval_seconds: 300,
            password_hash_cost: 10,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Read { path: String, message: String },
    Parse(String),
    InvalidValue { key: &'static str, value: String },
    MissingDatabaseUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, message } => {
                write!(f, "failed to read config file {path}: {message}")
            }
            ConfigError::Parse(message) => write!(f, "invalid config file: {message}"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
            ConfigError::MissingDatabaseUrl => {
                write!(f, "DATABASE_URL must be set for the postgres backend")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Settings {
    // File (if any), then environment overrides, then validation.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var("REVIEW_SERVER_CONFIG").ok();
        let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);

        let mut settings = match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path, "loading config file");
                Self::from_toml(&contents)?
            }
            // Only an explicitly named file is required to exist.
            Err(err) if explicit.is_none() && err.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                return Err(ConfigError::Read {
                    path: path.to_string(),
                    message: err.to_string(),
                })
            }
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup("REVIEW_SERVER_HOST") {
            self.host = parse_value("REVIEW_SERVER_HOST", &value)?;
        }
        if let Some(value) = lookup("REVIEW_SERVER_PORT") {
            self.port = parse_value("REVIEW_SERVER_PORT", &value)?;
        }
        if let Some(value) = lookup("STORAGE_BACKEND") {
            self.storage_backend =
                StorageBackend::parse(&value).ok_or(ConfigError::InvalidValue {
                    key: "STORAGE_BACKEND",
                    value,
                })?;
        }
        if let Some(value) = lookup("DATABASE_URL") {
            self.database_url = Some(value);
        }
        if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database_max_connections = parse_value("DATABASE_MAX_CONNECTIONS", &value)?;
        }
        if let Some(value) = lookup("CORS_ORIGIN") {
            self.cors_origin = value;
        }
        if let Some(value) = lookup("SESSION_TTL_SECONDS") {
            self.session_ttl_seconds = parse_value("SESSION_TTL_SECONDS", &value)?;
        }
        if let Some(value) = lookup("SESSION_PRUNE_INTERVAL_SECONDS") {
            self.session_prune_interval_seconds =
                parse_value("SESSION_PRUNE_INTERVAL_SECONDS", &value)?;
        }
        if let Some(value) = lookup("PASSWORD_HASH_COST") {
            self.password_hash_cost = parse_value("PASSWORD_HASH_COST", &value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_backend == StorageBackend::Postgres
            && self
                .database_url
                .as_deref()
                .map_or(true, |url| url.trim().is_empty())
        {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.password_hash_cost) {
            return Err(ConfigError::InvalidValue {
                key: "PASSWORD_HASH_COST",
                value: self.password_hash_cost.to_string(),
            });
        }
        if self.session_ttl_seconds > MAX_SESSION_TTL_SECONDS {
            return Err(ConfigError::InvalidValue {
                key: "SESSION_TTL_SECONDS",
                value: self.session_ttl_seconds.to_string(),
            });
        }
        if self.session_prune_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SESSION_PRUNE_INTERVAL_SECONDS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
