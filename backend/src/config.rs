//! Configuration management for the FarmEasy platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARMEASY_ prefix
//! 4. Deployment variables: PORT and the MYSQL_* credentials

use config::builder::{ConfigBuilder, DefaultState};
use config::{ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Starting port for the bind walk
    pub port: u16,

    /// Server host
    pub host: String,

    /// Maximum number of bind attempts before giving up
    pub max_bind_attempts: u32,

    /// Directory served under /static
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// MySQL host
    pub host: String,

    /// MySQL port
    pub port: u16,

    /// MySQL user
    pub user: String,

    /// MySQL password
    pub password: String,

    /// Database name
    pub name: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Connection options for the pool
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARMEASY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let mut builder = base_builder(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARMEASY_ prefix)
            .add_source(
                Environment::with_prefix("FARMEASY")
                    .separator("__")
                    .try_parsing(true),
            );

        // Deployment variables take precedence over everything else. PORT is
        // kept as a raw string so an unparseable value (e.g. "-1") surfaces
        // as a configuration error before any bind attempt is made.
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("MYSQL_HOST") {
            builder = builder.set_override("database.host", host)?;
        }
        if let Ok(user) = std::env::var("MYSQL_USER") {
            builder = builder.set_override("database.user", user)?;
        }
        if let Ok(password) = std::env::var("MYSQL_PASS") {
            builder = builder.set_override("database.password", password)?;
        }
        if let Ok(name) = std::env::var("MYSQL_DB") {
            builder = builder.set_override("database.name", name)?;
        }

        builder.build()?.try_deserialize()
    }
}

/// Builder carrying the in-code defaults
fn base_builder(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("environment", environment)?
        .set_default("server.port", 8080)?
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.max_bind_attempts", 10)?
        .set_default("server.static_dir", "backend/public")?
        .set_default("database.host", "127.0.0.1")?
        .set_default("database.port", 3306)?
        .set_default("database.user", "root")?
        .set_default("database.password", "")?
        .set_default("database.name", "farmeasy")?
        .set_default("database.max_connections", 10)?
        .set_default("database.min_connections", 2)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            max_bind_attempts: 10,
            static_dir: "backend/public".to_string(),
        }
    }
}
