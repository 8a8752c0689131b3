//! Authentication module
//!
//! The login gate in front of the verification flow and the logout action of
//! the top bar. Credential checking is a capability ([`AuthService`]) so the
//! mocked check can be swapped for a real identity provider.

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::{LoginGate, PASSWORD_RECOVERY_HINT};
pub use traits::AuthService;
