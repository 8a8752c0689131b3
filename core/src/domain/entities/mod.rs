//! Domain entities with identity and lifecycle.

pub mod user;
pub mod verification_session;

#[cfg(test)]
mod tests;

pub use user::UserSession;
pub use verification_session::{CompletedVerification, VerificationSession};
