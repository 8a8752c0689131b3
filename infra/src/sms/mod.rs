//! SMS Module
//!
//! Delivery of verification codes. Only a mock dispatcher exists: it prints the
//! message in development instead of contacting a gateway.

pub mod mock_sms;

pub use mock_sms::MockCodeDispatcher;

#[cfg(test)]
mod tests;

/// Body of the verification SMS
pub fn verification_message(code: &str) -> String {
    format!("Tu código de verificación es: {}", code)
}
