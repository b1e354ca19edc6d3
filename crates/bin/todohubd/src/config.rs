//! Daemon settings.
//!
//! Resolved in three layers, later ones winning:
//! built-in defaults, an optional `todohub.toml`, then the environment
//! (`TODOHUB_BIND`, `TODOHUB_DATABASE_URL`, `RUST_LOG`). The file is looked up
//! in the working directory unless `TODOHUB_CONFIG` points elsewhere.
//!
//! ```toml
//! bind = "127.0.0.1:8080"
//! database_url = "sqlite:todohub.db?mode=rwc"
//! log_filter = "todohubd=debug,tower_http=debug"
//! ```

use std::net::{AddrParseError, SocketAddr};

use serde::Deserialize;

const DEFAULT_FILE: &str = "todohub.toml";

/// Fully resolved daemon settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Listener address.
    pub bind: SocketAddr,
    /// sqlx `SQLite` URL.
    pub database_url: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            database_url: "sqlite:todohub.db?mode=rwc".to_string(),
            log_filter: "todohubd=info,todohub=info,tower_http=debug".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file")]
    Parse(#[from] toml::de::Error),
    #[error("TODOHUB_BIND is not a socket address: {raw}")]
    Bind {
        raw: String,
        #[source]
        source: AddrParseError,
    },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

impl Config {
    /// Resolve settings from the process environment and the config file.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, when
    /// `TODOHUB_BIND` is not an address, or when the result is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let env = |key: &str| std::env::var(key).ok();
        let path = env("TODOHUB_CONFIG").unwrap_or_else(|| DEFAULT_FILE.to_string());
        let file = match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        Self::resolve(file.as_deref(), env)
    }

    fn resolve(
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(text) => toml::from_str(text)?,
            None => Self::default(),
        };

        if let Some(raw) = env("TODOHUB_BIND") {
            config.bind = raw
                .parse()
                .map_err(|source| ConfigError::Bind { raw, source })?;
        }
        if let Some(url) = env("TODOHUB_DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(filter) = env("RUST_LOG") {
            config.log_filter = filter;
        }

        if config.bind.port() == 0 {
            return Err(ConfigError::Invalid("bind port must be non-zero"));
        }
        if config.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("database_url must not be empty"));
        }
        Ok(config)
    }
}
