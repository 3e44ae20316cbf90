//! Environment-based application configuration.

use crate::server::error::config::ConfigError;

/// Store used when `DATABASE_URL` is not set: a SQLite file in the working
/// directory, created on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./dev.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SeaORM connection URL (`sqlite:`, `postgres://` or `mysql://`).
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call after `dotenvy::dotenv()` so values from a `.env` file are visible.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied for unset variables
    /// - `Err(ConfigError::InvalidEnvVar)` - `APP_PORT` is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                tracing::info!(
                    "DATABASE_URL not set, using local SQLite database {}",
                    DEFAULT_DATABASE_URL
                );
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        let host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("APP_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "APP_PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_sqlite(&self) -> bool {
        self.database_url.starts_with("sqlite:")
    }
}
