//! Application configuration loaded from environment variables.
//!
//! Fail-fast: required variables must be present and valid or the process
//! exits with a clear message before binding the listener.

use std::env;
use thiserror::Error;

/// Session secret tolerated only outside production.
pub const INSECURE_SESSION_SECRET: &str = "desarrollo-cambie-este-secreto";

/// Application environment mode. Production refuses insecure defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    fn from_env_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }
}

/// Configuration errors surfaced at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {variable}: {message}")]
    Invalid {
        variable: &'static str,
        message: String,
    },

    #[error("SESSION_SECRET is the insecure development default; refusing to start in production")]
    InsecureSecretInProduction,
}

/// Optional bootstrap superuser credentials.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub session_secret: String,
    pub session_ttl_minutes: i64,
    pub rust_log: String,
    pub max_connections: u32,
    pub permitir_re_revision: bool,
    pub app_env: AppEnvironment,
    pub admin: Option<AdminBootstrap>,
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(v) => match v.to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            other => Err(ConfigError::Invalid {
                variable: name,
                message: format!("expected a boolean, got {other:?}"),
            }),
        },
    }
}

impl Config {
    /// Load from the environment.
    ///
    /// # Errors
    ///
    /// Any missing or invalid required value; the insecure session-secret
    /// default in production mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_env = AppEnvironment::from_env_str(&optional("APP_ENV", "development"));

        let session_secret = optional("SESSION_SECRET", INSECURE_SESSION_SECRET);
        if session_secret == INSECURE_SESSION_SECRET {
            if app_env.is_production() {
                return Err(ConfigError::InsecureSecretInProduction);
            }
            tracing::warn!(
                "SESSION_SECRET not set; using the insecure development default"
            );
        }

        let session_ttl_minutes = optional("SESSION_TTL_MINUTES", "480")
            .parse::<i64>()
            .map_err(|e| ConfigError::Invalid {
                variable: "SESSION_TTL_MINUTES",
                message: e.to_string(),
            })?;
        if session_ttl_minutes <= 0 {
            return Err(ConfigError::Invalid {
                variable: "SESSION_TTL_MINUTES",
                message: "must be positive".to_string(),
            });
        }

        let max_connections = optional("DATABASE_MAX_CONNECTIONS", "10")
            .parse::<u32>()
            .map_err(|e| ConfigError::Invalid {
                variable: "DATABASE_MAX_CONNECTIONS",
                message: e.to_string(),
            })?;

        let admin = match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
            (Ok(email), Ok(password)) => Some(AdminBootstrap {
                nombre: optional("ADMIN_NOMBRE", "Administrador del Sistema"),
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_addr: optional("LISTEN_ADDR", "0.0.0.0:8080"),
            session_secret,
            session_ttl_minutes,
            rust_log: optional("RUST_LOG", "info,califica=debug"),
            max_connections,
            permitir_re_revision: parse_bool("PERMITIR_RE_REVISION", false)?,
            app_env,
            admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_se_reconoce() {
        assert!(AppEnvironment::from_env_str("production").is_production());
        assert!(AppEnvironment::from_env_str("PROD").is_production());
        assert!(!AppEnvironment::from_env_str("development").is_production());
        assert!(!AppEnvironment::from_env_str("cualquier-cosa").is_production());
    }
}
