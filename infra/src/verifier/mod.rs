//! Verifier Module
//!
//! Code acceptance check. The mock accepts exactly one configured code for
//! any phone number.

use async_trait::async_trait;
use tracing::debug;

use idv_core::domain::value_objects::MobilePhone;
use idv_core::errors::CapabilityError;
use idv_core::services::verification::CodeVerifier;

/// Verifier that accepts a single fixed code
#[derive(Debug, Clone)]
pub struct FixedCodeVerifier {
    accepted_code: String,
    simulate_failure: bool,
}

impl FixedCodeVerifier {
    pub fn new(accepted_code: &str) -> Self {
        Self {
            accepted_code: accepted_code.to_string(),
            simulate_failure: false,
        }
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for FixedCodeVerifier {
    fn default() -> Self {
        Self::new("123456")
    }
}

#[async_trait]
impl CodeVerifier for FixedCodeVerifier {
    async fn verify(&self, phone: &MobilePhone, code: &str) -> Result<bool, CapabilityError> {
        if self.simulate_failure {
            return Err(CapabilityError::new("verifier", "simulated verifier outage"));
        }

        let accepted = code == self.accepted_code;
        debug!(
            target: "verifier",
            provider = "mock",
            phone = %phone.masked(),
            accepted,
            "Code checked"
        );
        Ok(accepted)
    }
}
