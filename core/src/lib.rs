//! # Identity Verification Core
//!
//! Domain types, the verification flow state machine, the resend countdown,
//! the login gate and the capability interfaces backends implement.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
