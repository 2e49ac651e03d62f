use crate::domain::{ValidationPolicy, DEFAULT_MIN_DOCUMENT_HASH_LEN};
use std::env;
use thiserror::Error;

/// Persistent database location used when `NOTARY_DB_PATH` is unset
pub const DEFAULT_DB_PATH: &str = "/var/lib/notary/notary.db";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rollup_server_url: String,
    pub db_path: String,
    pub policy: ValidationPolicy,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// `ROLLUP_HTTP_SERVER_URL` is required. `NOTARY_DB_PATH` and
    /// `NOTARY_MIN_DOCUMENT_HASH_LEN` fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rollup_server_url =
            lookup("ROLLUP_HTTP_SERVER_URL").ok_or(ConfigError::Missing("ROLLUP_HTTP_SERVER_URL"))?;

        let db_path = lookup("NOTARY_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let min_document_hash_len = match lookup("NOTARY_MIN_DOCUMENT_HASH_LEN") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "NOTARY_MIN_DOCUMENT_HASH_LEN",
                value,
            })?,
            None => DEFAULT_MIN_DOCUMENT_HASH_LEN,
        };

        Ok(Self {
            rollup_server_url,
            db_path,
            policy: ValidationPolicy::new(min_document_hash_len),
        })
    }
}
