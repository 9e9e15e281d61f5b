// src/config.rs
use crate::domain::validation::{DEFAULT_MAX_VAR_CHAR, FieldLimits};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    field_limits: FieldLimits,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://articles.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_max_connections() -> u32 {
    16
}

impl AppConfig {
    /// Build configuration from environment variables (a `.env` file is
    /// loaded by `main` beforehand), falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let max_var_char = match lookup("MAX_VAR_CHAR") {
            Some(raw) => parse_positive("MAX_VAR_CHAR", &raw)?,
            None => DEFAULT_MAX_VAR_CHAR,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => u32::try_from(parse_positive("DATABASE_MAX_CONNECTIONS", &raw)?)
                .map_err(|_| {
                    ConfigError::Invalid("DATABASE_MAX_CONNECTIONS is out of range".into())
                })?,
            None => default_max_connections(),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            field_limits: FieldLimits::new(max_var_char),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Maximum length shared by every string column.
    pub const fn field_limits(&self) -> FieldLimits {
        self.field_limits
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}
