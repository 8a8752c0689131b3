//! Mock SMS dispatcher implementation
//!
//! Logs verification messages instead of sending them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use idv_core::domain::value_objects::MobilePhone;
use idv_core::errors::CapabilityError;
use idv_core::services::verification::CodeDispatcher;

use super::verification_message;

/// Simulated gateway round trip
const SIMULATED_LATENCY: Duration = Duration::from_millis(100);

/// Mock code dispatcher for development and testing
///
/// This implementation:
/// - Prints the SMS to the console when enabled
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockCodeDispatcher {
    /// Code included in every message
    code: String,
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockCodeDispatcher {
    /// Create a silent dispatcher sending the default code
    pub fn new() -> Self {
        Self::with_options("123456", false, false)
    }

    /// Create a dispatcher with configurable options
    pub fn with_options(code: &str, console_output: bool, simulate_failure: bool) -> Self {
        Self {
            code: code.to_string(),
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockCodeDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeDispatcher for MockCodeDispatcher {
    async fn dispatch(&self, phone: &MobilePhone) -> Result<String, CapabilityError> {
        let masked_phone = phone.masked();

        if self.simulate_failure {
            warn!(
                target: "sms_service",
                provider = "mock",
                phone = %masked_phone,
                "Mock SMS dispatcher simulating failure"
            );
            return Err(CapabilityError::new("sms", "simulated SMS sending failure"));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", phone.formatted());
            println!("Message ID: {}", message_id);
            println!("Content: {}", verification_message(&self.code));
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            "SMS sent successfully (mock)"
        );

        tokio::time::sleep(SIMULATED_LATENCY).await;

        Ok(message_id)
    }
}
