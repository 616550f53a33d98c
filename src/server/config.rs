use crate::models::Error;

use log::LevelFilter;
use std::str::FromStr;

pub const DEFAULT_PORT: &str = ":8080";
pub const DEFAULT_API_KEY: &str = "ChangeMe";
pub const DEFAULT_LOG_LEVEL: &str = "1";

/// Process settings read once at startup.
///
///   RAKE_PORT: `:PORT`, `PORT` or `HOST:PORT` (default `:8080`)
///   API_KEY:   shared credential for `/keywords` (default `ChangeMe`)
///   LOG_LEVEL: 1=debug, 2=info, 3=warn, 4=error, 5=off, or a level name (default 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub api_key: String,
    pub log_level: LevelFilter,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("RAKE_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let api_key = lookup("API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(ServerConfig {
            bind_addr: parse_bind_addr(&port)?,
            api_key,
            log_level: parse_log_level(&log_level)?,
        })
    }

    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

/// Normalizes the listening address. A bare or colon-prefixed port binds every interface.
pub fn parse_bind_addr(value: &str) -> Result<String, Error> {
    let value = value.trim();

    let (host, port) = match value.rsplit_once(':') {
        Some((host, port)) => (host, port),
        None => ("", value),
    };

    port.parse::<u16>().map_err(|_| {
        Error::ConfigError(format!("RAKE_PORT has an invalid port: {:?}", value))
    })?;

    let host = if host.is_empty() { "0.0.0.0" } else { host };

    Ok(format!("{}:{}", host, port))
}

pub fn parse_log_level(value: &str) -> Result<LevelFilter, Error> {
    let value = value.trim();

    let level = match value {
        "1" => LevelFilter::Debug,
        "2" => LevelFilter::Info,
        "3" => LevelFilter::Warn,
        "4" => LevelFilter::Error,
        "5" => LevelFilter::Off,
        name => LevelFilter::from_str(name).map_err(|_| {
            Error::ConfigError(format!("LOG_LEVEL is not a known level: {:?}", value))
        })?,
    };

    Ok(level)
}
