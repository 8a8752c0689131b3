//! Capability interfaces the verification flow depends on
//!
//! Each backend step has a two-outcome contract: a typed answer, or a
//! [`CapabilityError`] the flow reports as a recoverable transport failure.

use async_trait::async_trait;

use crate::domain::value_objects::{MobilePhone, NationalId, PhoneResolution};
use crate::errors::CapabilityError;

/// Looks up the phone number registered for a national ID
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    async fn resolve_phone(&self, id: &NationalId) -> Result<PhoneResolution, CapabilityError>;
}

/// Checks a submitted code for a phone number
#[async_trait]
pub trait CodeVerifier: Send + Sync {
    /// `Ok(true)` if the code is accepted
    async fn verify(&self, phone: &MobilePhone, code: &str) -> Result<bool, CapabilityError>;
}

/// Sends a verification code to a phone number
#[async_trait]
pub trait CodeDispatcher: Send + Sync {
    /// Returns the provider message id
    async fn dispatch(&self, phone: &MobilePhone) -> Result<String, CapabilityError>;
}

/// Registration of the periodic one-second trigger that drives [`tick`]
///
/// [`tick`]: super::VerificationFlow::tick
pub trait TickScheduler: Send {
    /// Start (or restart) periodic ticking; every tick carries `epoch`
    fn schedule(&mut self, epoch: u64);
    /// Stop ticking; a no-op when not scheduled
    fn cancel(&mut self);
    fn is_active(&self) -> bool;
}
