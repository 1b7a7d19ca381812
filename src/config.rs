use std::env;
use std::str::FromStr;

use log::info;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} must be a valid number, got {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` via dotenv).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        Ok(Self {
            host: or_default("HOST", "127.0.0.1"),
            port: parse("PORT", or_default("PORT", "8000"))?,
            mongodb_uri: or_default("MONGODB_URI", "mongodb://localhost:27017"),
            database_name: or_default("DATABASE_NAME", "book_reviews"),
            jwt_secret: lookup("JWT_SECRET")
                .filter(|secret| !secret.trim().is_empty())
                .ok_or(ConfigError::Missing("JWT_SECRET"))?,
            token_ttl_hours: parse("TOKEN_TTL_HOURS", or_default("TOKEN_TTL_HOURS", "24"))?,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
