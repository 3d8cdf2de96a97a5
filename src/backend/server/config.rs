/**
 * Server Configuration
 *
 * Configuration is read once at startup into a `ServerConfig` and passed
 * by reference to whatever needs it. Nothing reads the environment after
 * that.
 *
 * # Configuration Sources
 *
 * | Variable       | Required | Default | Meaning                          |
 * |----------------|----------|---------|----------------------------------|
 * | `JWT_SECRET`   | yes      |         | HMAC secret for session tokens   |
 * | `DATABASE_URL` | no       |         | Postgres URL; unset = in-memory  |
 * | `SERVER_PORT`  | no       | 8080    | Listen port                      |
 *
 * A `.env` file is honoured by the binary (via dotenv) before this runs.
 */

use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid {
        name: &'static str,
        value: String,
    },
}

/// Startup configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// Postgres connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Listen port
    pub port: u16,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let jwt_secret = non_empty("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let database_url = non_empty("DATABASE_URL");

        let port = match non_empty("SERVER_PORT") {
            None => DEFAULT_PORT,
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                value,
            })?,
        };

        Ok(Self {
            jwt_secret,
            database_url,
            port,
        })
    }
}
