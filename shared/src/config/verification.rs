//! Verification flow and mocked backend configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default countdown before a code can be resent (2 minutes)
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 120;

/// Verification flow configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Seconds the user must wait before a code can be resent
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
        }
    }
}

impl VerificationConfig {
    /// Load from `VERIFICATION_COUNTDOWN_SECONDS`, falling back to defaults
    pub fn from_env() -> Self {
        let countdown_seconds = env::var("VERIFICATION_COUNTDOWN_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u32| *secs > 0)
            .unwrap_or(DEFAULT_COUNTDOWN_SECONDS);

        Self { countdown_seconds }
    }
}

/// Values used by the mocked backend services
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MockBackendConfig {
    /// The only verification code the mock verifier accepts
    pub accepted_code: String,
    /// National ID the mock directory has no phone number for
    pub unregistered_id: String,
    /// Phone number the mock directory returns for every other ID
    pub directory_phone: String,
    /// Username accepted by the login gate
    pub username: String,
    /// Password accepted by the login gate
    pub password: String,
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self {
            accepted_code: String::from("123456"),
            unregistered_id: String::from("12345678"),
            directory_phone: String::from("098765432"),
            username: String::from("admin"),
            password: String::from("Test.1234"),
        }
    }
}

impl MockBackendConfig {
    /// Load from `MOCK_*` variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, fallback: String| env::var(name).unwrap_or(fallback);

        Self {
            accepted_code: var("MOCK_ACCEPTED_CODE", defaults.accepted_code),
            unregistered_id: var("MOCK_UNREGISTERED_ID", defaults.unregistered_id),
            directory_phone: var("MOCK_DIRECTORY_PHONE", defaults.directory_phone),
            username: var("MOCK_USERNAME", defaults.username),
            password: var("MOCK_PASSWORD", defaults.password),
        }
    }
}

fn default_countdown_seconds() -> u32 {
    DEFAULT_COUNTDOWN_SECONDS
}
