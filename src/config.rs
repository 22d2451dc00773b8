//! Configuration management for Bookshelf server

use config::{Config, ConfigError, Environment, File};
use jsonwebtoken::Algorithm;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Must be one of the HMAC algorithms (HS256, HS384, HS512)
    pub jwt_algorithm: Algorithm,
    pub token_expiration_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BOOKSHELF__AUTH__JWT_SECRET -> auth.jwt_secret
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("auth.jwt_secret", env::var("JWT_SECRET").ok())?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(
            self.auth.jwt_algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(ConfigError::Message(format!(
                "auth.jwt_algorithm must be an HMAC algorithm, got {:?}",
                self.auth.jwt_algorithm
            )));
        }
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::Message("auth.jwt_secret must not be empty".into()));
        }
        if !(1..=MAX_TOKEN_EXPIRATION_MINUTES).contains(&self.auth.token_expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "auth.token_expiration_minutes must be between 1 and {}",
                MAX_TOKEN_EXPIRATION_MINUTES
            )));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://books.db".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-this-secret-in-production".to_string(),
            jwt_algorithm: Algorithm::HS256,
            token_expiration_minutes: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.token_expiration_minutes, 30);
        assert_eq!(config.auth.jwt_algorithm, Algorithm::HS256);
    }

    #[test]
    fn rejects_asymmetric_algorithm() {
        let mut config = AppConfig::default();
        config.auth.jwt_algorithm = Algorithm::RS256;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_secret_and_zero_lifetime() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret.clear();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.auth.token_expiration_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_lifetime() {
        let mut config = AppConfig::default();
        config.auth.token_expiration_minutes = i64::MAX;
        assert!(config.validate().is_err());

        config.auth.token_expiration_minutes = MAX_TOKEN_EXPIRATION_MINUTES + 1;
        assert!(config.validate().is_err());

        config.auth.token_expiration_minutes = MAX_TOKEN_EXPIRATION_MINUTES;
        assert!(config.validate().is_ok());
    }
}
