//! Database configuration
//!
//! Settings are read once at process start and handed to the connection
//! manager; nothing re-reads the environment afterwards. A full
//! `DATABASE_URL` takes precedence over the discrete variables.

use std::env;

use thiserror::Error;

/// Default server port for PostgreSQL.
const DEFAULT_DB_PORT: u16 = 5432;

/// Default pool size. Kept low for a single-frontend service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {name}")]
    MissingVar { name: &'static str },

    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Connection settings for the relational store.
///
/// Either `url` is set (and wins), or the discrete fields describe the
/// server. The encryption flag maps to the driver's TLS mode.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL override (`DATABASE_URL`).
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Require TLS on the wire when set.
    pub encrypt: bool,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Read settings from the process environment.
    ///
    /// `DATABASE_URL` short-circuits everything else. Without it,
    /// `DB_USER`, `DB_PASS` and `DB_NAME` are required; host, port,
    /// encryption and pool size have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Split out from [`from_env`](Self::from_env) so tests can supply
    /// variables without mutating process-global state.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = get("DATABASE_URL") {
            return Ok(Self {
                url: Some(url),
                max_connections: max_connections(&get)?,
                ..Self::unset()
            });
        }

        Ok(Self {
            url: None,
            host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: match get("DB_PORT") {
                Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                    name: "DB_PORT",
                    value: raw,
                })?,
                None => DEFAULT_DB_PORT,
            },
            user: require(&get, "DB_USER")?,
            password: require(&get, "DB_PASS")?,
            database: require(&get, "DB_NAME")?,
            encrypt: match get("DB_ENCRYPT") {
                Some(raw) => parse_bool("DB_ENCRYPT", &raw)?,
                None => false,
            },
            max_connections: max_connections(&get)?,
        })
    }

    /// Placeholder discrete fields for the URL-override case.
    fn unset() -> Self {
        Self {
            url: None,
            host: String::new(),
            port: DEFAULT_DB_PORT,
            user: String::new(),
            password: String::new(),
            database: String::new(),
            encrypt: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

fn require(get: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<String, ConfigError> {
    get(name).ok_or(ConfigError::MissingVar { name })
}

fn max_connections(get: &impl Fn(&str) -> Option<String>) -> Result<u32, ConfigError> {
    match get("DB_MAX_CONNECTIONS") {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
            name: "DB_MAX_CONNECTIONS",
            value: raw,
        }),
        None => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            name,
            value: raw.to_string(),
        }),
    }
}
