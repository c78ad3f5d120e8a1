use std::env;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server settings read from the environment (and `.env`, loaded by `main`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub cors_allowed_origins: String,
    /// Upper bound for one mutation, including its hooks.
    pub db_operation_timeout: Option<Duration>,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            warn!("JWT_SECRET not set, using default (not secure for production)");
            "default-secret-change-in-production".to_string()
        });
        let timeout_ms: u64 = parse(&lookup, "DB_OPERATION_TIMEOUT_MS", 0)?;

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(&lookup, "PORT", 8080)?,
            jwt_secret,
            jwt_expiration_hours: parse(&lookup, "JWT_EXPIRATION_HOURS", 24)?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000,http://localhost:5173".to_string()),
            db_operation_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(config(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn defaults_apply() {
        let config = config(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.jwt_expiration_hours, 24);
        assert_eq!(config.db_operation_timeout, None);
        assert!(config.is_development());
    }

    #[test]
    fn timeout_and_port_are_parsed() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/inventory"),
            ("PORT", "9000"),
            ("DB_OPERATION_TIMEOUT_MS", "2500"),
            ("ENVIRONMENT", "production"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_operation_timeout, Some(Duration::from_millis(2500)));
        assert!(!config.is_development());
    }

    #[test]
    fn bad_numbers_are_reported() {
        let err = config(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT has an invalid value \"eighty\"");
    }
}
