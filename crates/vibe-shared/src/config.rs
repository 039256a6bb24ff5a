//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_DB_ACQUIRE_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_LOG_LEVEL};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

impl AppConfig {
    /// Layering: defaults, `config/default`, `config/{APP_ENV}`, then `VIBE__*` env vars.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", env.as_str())?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8001)?
            .set_default("app.name", "vibe-server")?
            .set_default("database.url", "postgres://localhost/bachatavibe")?
            .set_default("database.max_connections", DEFAULT_DB_MAX_CONNECTIONS as i64)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", DEFAULT_DB_ACQUIRE_TIMEOUT_SECS as i64)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("logging.json", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("VIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::InvalidConfig("database.url must not be empty".into()));
        }
        if self.database.max_connections == 0 {
            return Err(AppError::InvalidConfig("database.max_connections must be at least 1".into()));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::InvalidConfig(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppConfig {
        AppConfig {
            app: AppSettings {
                env: "development".into(),
                host: "127.0.0.1".into(),
                port: 8001,
                name: "vibe-server".into(),
            },
            database: DatabaseSettings {
                url: "postgres://localhost/bachatavibe".into(),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 3,
            },
            cors: CorsSettings { allowed_origins: vec!["http://localhost:3000".into()] },
            logging: LoggingSettings { level: "info".into(), json: true, directory: None },
        }
    }

    #[test]
    fn test_valid_config() {
        let config = sample();
        assert!(config.validate().is_ok());
        assert!(!config.is_production());
    }

    #[test]
    fn test_rejects_inverted_pool_bounds() {
        let mut config = sample();
        config.database.min_connections = 20;
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_empty_database_url() {
        let mut config = sample();
        config.database.url = "  ".into();
        assert!(config.validate().is_err());
    }
}
