use crate::error::{AppError, Result};
use std::env;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

/// Store connection settings. Both values are optional: a missing one leaves
/// the service running without a store.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn url_is_set(&self) -> bool {
        self.url.is_some()
    }

    pub fn name_is_set(&self) -> bool {
        self.name.is_some()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "10485760".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database: DatabaseConfig {
                url: non_empty_var(DATABASE_URL_VAR),
                name: non_empty_var(DATABASE_NAME_VAR),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    unless_empty(env::var(key).ok())
}

/// Only the empty string counts as unset; whitespace is a value.
fn unless_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
