//! Shared utilities and common types for the identity verification flow
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types
//! - Input validators and sanitizers (national ID, mobile phone, codes)
//! - Language selection for user-facing messages

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, MockBackendConfig, VerificationConfig,
};
pub use types::Language;
pub use utils::{phone, validation};
