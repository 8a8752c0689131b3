//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `verification` - Countdown and mocked backend settings

pub mod environment;
pub mod verification;

use serde::{Deserialize, Serialize};
use std::env;

use crate::types::Language;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use verification::{MockBackendConfig, VerificationConfig, DEFAULT_COUNTDOWN_SECONDS};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Language used for notifications
    #[serde(default)]
    pub language: Language,

    /// Verification flow configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Mocked backend configuration
    #[serde(default)]
    pub mock_backend: MockBackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            language: Language::default(),
            verification: VerificationConfig::default(),
            mock_backend: MockBackendConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self::default()
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            logging: LoggingConfig::for_environment(Environment::Production),
            ..Self::default()
        }
    }

    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let language = env::var("APP_LANGUAGE")
            .ok()
            .and_then(|l| l.parse().ok())
            .unwrap_or_default();

        Self {
            environment,
            language,
            verification: VerificationConfig::from_env(),
            mock_backend: MockBackendConfig::from_env(),
            logging: LoggingConfig::for_environment(environment).with_env_overrides(),
        }
    }
}
