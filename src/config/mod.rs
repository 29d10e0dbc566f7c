mod app_config;

pub use app_config::{AppConfig, DATABASE_NAME_VAR, DATABASE_URL_VAR, DatabaseConfig, ServerConfig};
