//! Healthcare Demo API core library
//!
//! This module exports the record store, the HTTP layer and the
//! configuration of the healthcare demo service.

pub mod api;
pub mod core;
pub mod db;
pub mod error;
pub mod models;
pub mod telemetry;

/// Application configuration
pub mod config {
    use serde::Deserialize;

    pub const DEFAULT_PORT: u16 = 3010;

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct Config {
        pub server: ServerConfig,
        pub store: StoreConfig,
        pub auth: AuthConfig,
        pub cors: CorsConfig,
        pub log: LogConfig,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(default)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
        /// Worker threads; actix picks one per core when unset.
        pub workers: Option<usize>,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                host: "0.0.0.0".into(),
                port: DEFAULT_PORT,
                workers: None,
            }
        }
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(default)]
    pub struct StoreConfig {
        /// Load the demo data set at startup.
        pub seed: bool,
    }

    impl Default for StoreConfig {
        fn default() -> Self {
            Self { seed: true }
        }
    }

    /// Mock bearer-token check in front of the record routes.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(default)]
    pub struct AuthConfig {
        pub enabled: bool,
        pub token: String,
    }

    impl Default for AuthConfig {
        fn default() -> Self {
            Self {
                enabled: false,
                token: "demo-token".into(),
            }
        }
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct CorsConfig {
        /// Empty means any origin.
        pub allowed_origins: Vec<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(default)]
    pub struct LogConfig {
        pub level: String,
        pub json: bool,
    }

    impl Default for LogConfig {
        fn default() -> Self {
            Self {
                level: "info".into(),
                json: false,
            }
        }
    }

    /// Load configuration from file
    pub fn load_config() -> Result<Config, ::config::ConfigError> {
        let env = std::env::var("HEALTHCARE_ENV").unwrap_or_else(|_| "development".into());

        let mut config: Config = ::config::Config::builder()
            // Start with default settings
            .add_source(::config::File::with_name("config/default").required(false))
            // Override with environment-specific settings
            .add_source(::config::File::with_name(&format!("config/{}", env)).required(false))
            // Override with environment variables
            .add_source(::config::Environment::with_prefix("HEALTHCARE").separator("__"))
            .build()?
            .try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse().map_err(|_| {
                ::config::ConfigError::Message(format!("PORT must be a port number, got `{}`", port))
            })?;
        }

        Ok(config)
    }
}
