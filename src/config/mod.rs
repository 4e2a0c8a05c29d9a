//! # Configuration Management
//!
//! Application configuration loaded from environment variables. The JWT
//! signing secret is mandatory and has no default: a process that starts
//! without `SPENDLOG_JWT_SECRET` refuses to serve rather than falling back to
//! a well-known development key.

use std::time::Duration;

use crate::errors::{Error, Result};

/// Minimum accepted length for the JWT signing secret, in bytes.
const MIN_JWT_SECRET_LEN: usize = 32;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

/// HTTP API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self { bind_address: "0.0.0.0".to_string(), port: 5000 }
    }
}

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://spendlog.db".to_string(),
            max_connections: 10,
            connect_timeout_seconds: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify bearer tokens. Rotating it invalidates
    /// all outstanding tokens, which is acceptable given the 1-hour expiry.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub token_ttl_seconds: i64,
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("SPENDLOG_API_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|e| Error::config(format!("Invalid API port: {}", e)))?,
            Err(_) => ApiServerConfig::default().port,
        };

        let bind_address = std::env::var("SPENDLOG_API_BIND_ADDRESS")
            .unwrap_or_else(|_| ApiServerConfig::default().bind_address);

        let database_url = std::env::var("SPENDLOG_DATABASE_URL")
            .unwrap_or_else(|_| DatabaseConfig::default().url);

        let jwt_secret = std::env::var("SPENDLOG_JWT_SECRET").map_err(|_| {
            Error::config("SPENDLOG_JWT_SECRET must be set; no default is provided")
        })?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(Error::config(format!(
                "SPENDLOG_JWT_SECRET must be at least {} bytes",
                MIN_JWT_SECRET_LEN
            )));
        }

        let token_ttl_seconds = match std::env::var("SPENDLOG_TOKEN_TTL_SECONDS") {
            Ok(value) => value
                .parse()
                .map_err(|e| Error::config(format!("Invalid token TTL: {}", e)))?,
            Err(_) => 3600,
        };

        Ok(Self {
            api: ApiServerConfig { bind_address, port },
            database: DatabaseConfig { url: database_url, ..DatabaseConfig::default() },
            auth: AuthConfig { jwt_secret, token_ttl_seconds },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests mutate process-wide environment variables; serialize them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SPENDLOG_API_PORT");
        env::remove_var("SPENDLOG_API_BIND_ADDRESS");
        env::remove_var("SPENDLOG_DATABASE_URL");
        env::remove_var("SPENDLOG_JWT_SECRET");
        env::remove_var("SPENDLOG_TOKEN_TTL_SECONDS");
    }

    #[test]
    fn missing_jwt_secret_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn short_jwt_secret_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("SPENDLOG_JWT_SECRET", "short");
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
        clear_env();
    }

    #[test]
    fn config_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("SPENDLOG_JWT_SECRET", "0123456789abcdef0123456789abcdef");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.api.bind_address, "0.0.0.0");
        assert_eq!(config.auth.token_ttl_seconds, 3600);
        clear_env();
    }

    #[test]
    fn config_from_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("SPENDLOG_JWT_SECRET", "0123456789abcdef0123456789abcdef");
        env::set_var("SPENDLOG_API_PORT", "9090");
        env::set_var("SPENDLOG_API_BIND_ADDRESS", "127.0.0.1");
        env::set_var("SPENDLOG_TOKEN_TTL_SECONDS", "120");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.port, 9090);
        assert_eq!(config.api.bind_address, "127.0.0.1");
        assert_eq!(config.auth.token_ttl_seconds, 120);
        clear_env();
    }
}
