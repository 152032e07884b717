mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::{AddressBackend, StorageConfig};


// Server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const MIN_PORT: u16 = 1024;

// Database
pub const DEFAULT_DATABASE_FILENAME: &str = "storefront.db";
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
pub const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
pub const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

// Auth
pub const DEFAULT_COOKIE_NAME: &str = "token";
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 168;
pub const MIN_SESSION_TTL_HOURS: u64 = 1;
pub const MAX_SESSION_TTL_HOURS: u64 = 8760;

// Logging
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_DIRECTORY: &str = "log";

pub const CONFIG_DIR_ENV: &str = "SF_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".sf";
pub const CONFIG_FILENAME: &str = "config.toml";
