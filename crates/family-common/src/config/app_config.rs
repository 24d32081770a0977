//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).

use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub family: FamilyConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Family store configuration
#[derive(Debug, Clone)]
pub struct FamilyConfig {
    /// Family name stamped onto every member record
    pub last_name: String,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Allowed origins; any origin is accepted in development when empty
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "family-server".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_last_name() -> String {
    "Jackson".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every value has a default; the only failure mode is a present but
    /// unparseable variable (e.g. a non-numeric `PORT`).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| default_host()),
                port: parsed_var("PORT", default_port())?,
            },
            family: FamilyConfig {
                last_name: env::var("FAMILY_LAST_NAME").unwrap_or_else(|_| default_last_name()),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Parse an environment variable, falling back to a default when absent
fn parsed_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
