use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Connection string; the database name below overrides any name in it.
    pub url: String,
    pub name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
    /// Reserved for refresh tokens, which are not issued yet.
    #[serde(default = "default_refresh_token_expiration_days")]
    pub refresh_token_expiration_days: i64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_expiration_minutes() -> i64 {
    60
}

fn default_refresh_token_expiration_days() -> i64 {
    7
}

impl JwtConfig {
    pub fn token_settings(&self) -> auth::TokenSettings {
        auth::TokenSettings::new(
            self.secret.as_bytes().to_vec(),
            self.issuer.clone(),
            self.audience.clone(),
            self.expiration_minutes,
        )
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set to a non-empty value".to_string(),
            ));
        }
        if self.jwt.expiration_minutes <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be positive, got {}",
                self.jwt.expiration_minutes
            )));
        }
        if self.database.name.trim().is_empty() {
            return Err(ConfigError::Message(
                "database.name must be set to a non-empty value".to_string(),
            ));
        }

        Ok(())
    }
}
