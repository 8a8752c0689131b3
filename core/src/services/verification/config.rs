//! Configuration for the verification flow

use idv_shared::config::{AppConfig, DEFAULT_COUNTDOWN_SECONDS};
use idv_shared::types::Language;

/// Configuration for the verification flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFlowConfig {
    /// Seconds before a code can be resent
    pub countdown_seconds: u32,
    /// Language of notifications
    pub language: Language,
}

impl Default for VerificationFlowConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            language: Language::default(),
        }
    }
}

impl From<&AppConfig> for VerificationFlowConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            countdown_seconds: config.verification.countdown_seconds,
            language: config.language,
        }
    }
}
