//! # Infrastructure Layer
//!
//! Concrete implementations of the capability traits declared in `idv_core`.
//! Every backend is mocked: the rules are deterministic and configured through
//! [`MockBackendConfig`], so the flow can be exercised end to end without a
//! directory service or SMS gateway.
//!
//! Configuration is read with [`load_config`] and handed to
//! [`MockServices::from_config`].
//!
//! ## Modules
//!
//! - **directory**: phone lookup by national ID
//! - **verifier**: fixed-code verifier
//! - **sms**: code dispatcher that logs instead of sending
//! - **auth**: static credential check for the login gate
//! - **scheduler**: tokio-driven one-second ticker for the resend countdown

use std::sync::Arc;

use idv_shared::config::{AppConfig, Environment, MockBackendConfig};
use idv_shared::validation::is_valid_code;

/// Directory module - phone lookup by national ID
pub mod directory;

/// Verifier module - code acceptance check
pub mod verifier;

/// SMS module - code delivery
pub mod sms;

/// Auth module - credential check
pub mod auth;

/// Scheduler module - countdown ticks
pub mod scheduler;

pub use auth::StaticCredentials;
pub use directory::MockDirectory;
pub use scheduler::TokioTicker;
pub use sms::MockCodeDispatcher;
pub use verifier::FixedCodeVerifier;

/// Mocked backend service container
#[derive(Clone)]
pub struct MockServices {
    pub directory: Arc<MockDirectory>,
    pub verifier: Arc<FixedCodeVerifier>,
    pub dispatcher: Arc<MockCodeDispatcher>,
    pub auth: Arc<StaticCredentials>,
}

impl MockServices {
    /// Build every mocked service from one configuration block
    ///
    /// With `console_output` the dispatcher prints each SMS to stdout.
    pub fn from_config(
        config: &MockBackendConfig,
        console_output: bool,
    ) -> Result<Self, InfrastructureError> {
        Ok(Self {
            directory: Arc::new(MockDirectory::from_config(config)?),
            verifier: Arc::new(FixedCodeVerifier::new(&config.accepted_code)),
            dispatcher: Arc::new(MockCodeDispatcher::with_options(
                &config.accepted_code,
                console_output,
                false,
            )),
            auth: Arc::new(StaticCredentials::new(&config.username, &config.password)),
        })
    }
}

/// Load application configuration from environment
///
/// The environment-specific file (`.env.development`, ...) wins over `.env`;
/// variables already set in the process win over both.
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok(); // Load .env file if present

    let config = AppConfig::from_env();
    validate_config(&config)?;
    Ok(config)
}

/// Reject values the mocked services could never honor
pub fn validate_config(config: &AppConfig) -> Result<(), InfrastructureError> {
    if config.verification.countdown_seconds == 0 {
        return Err(InfrastructureError::Config(
            "VERIFICATION_COUNTDOWN_SECONDS must be greater than zero".to_string(),
        ));
    }
    MockDirectory::from_config(&config.mock_backend)?;
    if !is_valid_code(&config.mock_backend.accepted_code) {
        return Err(InfrastructureError::Config(format!(
            "MOCK_ACCEPTED_CODE must be {} digits",
            idv_shared::validation::CODE_LENGTH
        )));
    }
    Ok(())
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
